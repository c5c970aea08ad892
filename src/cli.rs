// Command-line and environment configuration.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Rock Paper Scissors against a random opponent
#[derive(Parser, Debug)]
#[command(name = "rps-cli")]
#[command(about = "Rock Paper Scissors in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Front end to start; asks interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Default front end when no subcommand is given
    #[arg(long, env = "RPS_MODE", value_enum, global = true)]
    pub mode: Option<Mode>,

    /// Disable colors on the arcade board
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Line-oriented game: type r/p/s, quit with q
    Prompt,
    /// Full-screen board with key buttons
    Arcade,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Prompt,
    Arcade,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Self {
        match command {
            Command::Prompt => Mode::Prompt,
            Command::Arcade => Mode::Arcade,
        }
    }
}

impl Cli {
    /// The explicitly requested mode: subcommand first, then `--mode`/`RPS_MODE`.
    pub fn requested_mode(&self) -> Option<Mode> {
        self.command.map(Mode::from).or(self.mode)
    }

    pub fn color(&self) -> bool {
        !self.no_color
    }
}
