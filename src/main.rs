// Entrypoint for the game.
// - Keeps `main` small: parse options, set up logging, pick a front end.
// - Returns `anyhow::Result` so terminal errors surface with context.

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use rps_cli::cli::{Cli, Mode};
use rps_cli::game::RandomOpponent;
use rps_cli::{arcade, prompt};
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the game on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mode = match cli.requested_mode() {
        Some(mode) => mode,
        None if std::io::stdin().is_terminal() => match choose_mode()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
        None => Mode::Prompt,
    };
    log::info!("starting {:?} mode", mode);

    let mut opponent = RandomOpponent::new();
    match mode {
        Mode::Prompt => prompt::play_stdio(&mut opponent)?,
        Mode::Arcade => arcade::run(&mut opponent, cli.color())?,
    };
    Ok(())
}

/// Keyboard-navigable menu shown when no mode was requested. `None` means
/// the user picked "Exit".
fn choose_mode() -> Result<Option<Mode>> {
    let items = vec!["Prompt", "Arcade", "Exit"];
    let selection = Select::new()
        .with_prompt("Rock Paper Scissors")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Some(Mode::Prompt),
        1 => Some(Mode::Arcade),
        _ => None,
    })
}
