use std::path::{Path, PathBuf};

use localshortcut::Platform;
use shortcut_sim::{Fired, Scenario, Simulator, replay};

fn scenario_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

fn fired(step: usize, name: &str) -> Fired {
    Fired {
        step,
        name: name.to_string(),
    }
}

#[test]
fn basic_scenario_replays() {
    let scenario = Scenario::load(&scenario_path("basic.ron")).expect("load");
    let got = replay(&scenario, Platform::MacOs).expect("replay");
    assert_eq!(
        got,
        vec![
            fired(3, "save"),
            fired(6, "save"),
            fired(8, "close-prefs"),
            fired(13, "save-shadowed"),
        ]
    );
}

#[test]
fn registry_state_after_replay() {
    let scenario = Scenario::load(&scenario_path("basic.ron")).expect("load");
    let mut sim = Simulator::new(Platform::Other);
    sim.run(&scenario).expect("replay");
    // "main" was fully unregistered; destroyed "prefs" keeps its entry.
    assert_eq!(sim.registry().tracked_windows(), 1);
    assert!(sim.registry().is_watching());
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Scenario::load(&scenario_path("does-not-exist.ron")).expect_err("must fail");
    assert!(matches!(err, shortcut_sim::Error::Read { .. }));
}
