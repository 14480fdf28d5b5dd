//! grab-demo: drive the multigrab core from the command line
//!
//! Usage:
//!   grab-demo run --scenario twist --ticks 120
//!   grab-demo --double-rotation interactive
//!   grab-demo --config ./multigrab.toml run --scenario stretch

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use multigrab_app::{AppConfig, Scenario};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grab-demo", version, about = "Multi-hand grab manipulation demo")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the max distance between the object and the grabbing hands
    #[arg(long, global = true)]
    max_grab_distance: Option<f32>,

    /// Start with rotation amplification enabled
    #[arg(long, global = true)]
    double_rotation: bool,

    /// Seed for the light recolor RNG
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a scripted session without a terminal UI
    Run {
        #[arg(long, value_enum, default_value_t = Scenario::Twist)]
        scenario: Scenario,

        /// Frames to simulate
        #[arg(long, default_value_t = 120)]
        ticks: u64,
    },
    /// Drive two simulated hands from the keyboard
    Interactive,
}

impl Command {
    /// Log filter used when `RUST_LOG` is unset
    fn default_log_level(&self) -> &'static str {
        match self {
            // The interactive UI owns the terminal, keep logs quiet unless asked
            Command::Interactive => "warn",
            Command::Run { .. } => "info",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.command.default_log_level());

    let mut config =
        AppConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(distance) = cli.max_grab_distance {
        config.grab.max_grab_distance = distance;
    }
    if cli.double_rotation {
        config.grab = config.grab.with_double_rotation(true);
    }
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Command::Run { scenario, ticks } => {
            let report = multigrab_app::run_scripted(&config, scenario, ticks, cli.seed)?;
            let p = report.end.position;
            println!(
                "{:?}: {} ticks, final position ({:.3}, {:.3}, {:.3}), \
                 moved {:.3} m, turned {:.1} deg",
                report.scenario,
                report.ticks,
                p.x,
                p.y,
                p.z,
                report.displacement(),
                report.rotation_angle().to_degrees()
            );
        }
        Command::Interactive => multigrab_app::run_interactive(config, cli.seed)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level_per_command() {
        let run = Cli::parse_from(["grab-demo", "run", "--scenario", "carry"]);
        assert_eq!(run.command.default_log_level(), "info");

        let interactive = Cli::parse_from(["grab-demo", "--double-rotation", "interactive"]);
        assert!(interactive.double_rotation);
        assert_eq!(interactive.command.default_log_level(), "warn");
    }
}
