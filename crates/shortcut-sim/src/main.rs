//! Binary entrypoint for `shortcut-sim`.
use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use localshortcut::Platform;
use logging::LogArgs;
use shortcut_sim::{Scenario, replay};
use tracing::error;

/// Platform choices on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlatformArg {
    /// Resolve accelerators as on macOS.
    Mac,
    /// Resolve accelerators as on Linux/Windows.
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(p: PlatformArg) -> Self {
        match p {
            PlatformArg::Mac => Self::MacOs,
            PlatformArg::Other => Self::Other,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "shortcut-sim",
    about = "Replay a window shortcut scenario and print which shortcuts fire",
    version
)]
/// Command-line interface for the `shortcut-sim` binary.
struct Cli {
    /// Path to a RON scenario file
    scenario: PathBuf,

    /// Platform to resolve accelerators for when the scenario does not pin one
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let platform = cli.platform.map_or_else(Platform::current, Platform::from);
    let result = Scenario::load(&cli.scenario).and_then(|s| replay(&s, platform));
    match result {
        Ok(fired) => {
            for f in &fired {
                println!("step {:>3}: {}", f.step, f.name);
            }
            println!("{} shortcut(s) fired", fired.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "scenario_failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
