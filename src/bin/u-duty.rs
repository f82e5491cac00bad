//! Solves a weekly duty roster and prints the assignment.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use u_duty::config::RosterConfig;
use u_duty::report::{render_json, render_report};
use u_duty::DutyError;

/// Preference-maximizing duty roster solver.
#[derive(Debug, Parser)]
#[command(name = "u-duty", version, about)]
struct Cli {
    /// Roster file (.toml or .json). Uses the built-in weekly instance if omitted.
    config: Option<PathBuf>,

    /// Print the assignment as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_duty=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<String, DutyError> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading roster");
            RosterConfig::load(path)?
        }
        None => RosterConfig::reference()?,
    };

    let (roster, assignment) = u_duty::solve_config(&config)?;

    if cli.json {
        render_json(&assignment)
    } else {
        Ok(render_report(&assignment, &roster))
    }
}
