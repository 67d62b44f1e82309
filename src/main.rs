//! Binary entry point: load configuration, start file logging, build an empty
//! roster, and hand it to the chosen front end until the user exits.
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use grade_roster::{logging, run_app, App, Config, Console, Roster};
use tracing::info;

/// Track students, their courses, and grades.
#[derive(Parser, Debug)]
#[command(name = "grade-roster", version, about)]
struct Cli {
    /// Use the line-oriented text menu instead of the dialog interface.
    #[arg(long)]
    console: bool,

    /// Configuration file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.logging)?;
    info!(console = cli.console, "starting grade roster");

    let mut roster = Roster::new();
    if cli.console {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Console::new(stdin.lock(), stdout.lock(), config.export.clone()).run(&mut roster)?;
    } else {
        let mut app = App::new(roster, &config);
        run_app(&mut app)?;
        roster = app.into_roster();
    }

    info!(students = roster.len(), "session ended");
    Ok(())
}
