// Prompt mode: the line-oriented terminal variant. Each line of input is one
// command; the loop keeps going until `quit`, end-of-input or Ctrl-C, and
// always prints the same final summary on the way out.

use crate::game::{Move, Opponent, Outcome};
use crate::session::{Session, Summary};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub const BANNER: &str =
    "Rock Paper Scissors - type 'rock', 'paper', 'scissors' (or r/p/s). Type 'quit' to exit.";
pub const PROMPT: &str = "Your move (r/p/s): ";
pub const HINT: &str =
    "Invalid input. Please type 'rock', 'paper', or 'scissors' (or r/p/s), or 'quit' to exit.";

/// Something that happened on the input side of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Eof,
    Interrupt,
}

/// What a single line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let token = line.trim();
        if token.is_empty() {
            return Command::Empty;
        }
        if token.eq_ignore_ascii_case("quit") || token.eq_ignore_ascii_case("q") {
            return Command::Quit;
        }
        match token.parse::<Move>() {
            Ok(m) => Command::Play(m),
            Err(e) => Command::Invalid(e.0),
        }
    }
}

/// Drive a session from `inputs` until it terminates, writing every message
/// to `out`. Running out of inputs counts as end-of-input.
pub fn run<I, W, O>(inputs: I, out: &mut W, opponent: &mut O) -> Result<Summary>
where
    I: IntoIterator<Item = Input>,
    W: Write,
    O: Opponent + ?Sized,
{
    let mut session = Session::new();
    let mut inputs = inputs.into_iter();
    log::info!("prompt session started");
    writeln!(out, "{}", BANNER)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match inputs.next().unwrap_or(Input::Eof) {
            Input::Line(line) => line,
            Input::Eof | Input::Interrupt => {
                writeln!(out)?;
                writeln!(out, "Exiting game...")?;
                break;
            }
        };

        match Command::parse(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Invalid(token) => {
                log::debug!("rejected input {:?}", token);
                writeln!(out, "{}", HINT)?;
            }
            Command::Play(player) => {
                let round = session.play(player, opponent)?;
                match round.outcome {
                    Outcome::Tie => writeln!(out, "Both chose {}. It's a tie.", round.player)?,
                    Outcome::PlayerWin => writeln!(
                        out,
                        "You chose {}, computer chose {}. You win this round!",
                        round.player, round.computer
                    )?,
                    Outcome::ComputerWin => writeln!(
                        out,
                        "You chose {}, computer chose {}. Computer wins this round.",
                        round.player, round.computer
                    )?,
                }
                writeln!(
                    out,
                    "Score - You: {}  Computer: {}\n",
                    session.player_score(),
                    session.computer_score()
                )?;
            }
        }
    }

    let summary = session.finish();
    writeln!(out, "{}", summary)?;
    out.flush()?;
    Ok(summary)
}

/// Turn a reader into inputs, ending with a single `Eof`. Bytes that are not
/// UTF-8 are replaced so the line still reaches the parser; only a failed
/// read ends the stream early.
pub fn lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = Input> {
    let mut done = false;
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                done = true;
                Some(Input::Eof)
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(Input::Line(line.trim_end_matches(['\n', '\r']).to_string()))
            }
            Err(e) => {
                log::warn!("stdin read failed: {}", e);
                done = true;
                Some(Input::Eof)
            }
        }
    })
}

/// Stdin lines and Ctrl-C merged into one channel. The receiving thread is
/// the only one that ever sees the session.
pub fn stdin_inputs() -> Result<Receiver<Input>> {
    let (tx, rx) = mpsc::channel();

    let interrupts = tx.clone();
    ctrlc::set_handler(move || {
        log::debug!("interrupt received");
        let _ = interrupts.send(Input::Interrupt);
    })
    .context("Failed to register Ctrl-C handler")?;

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for input in lines(stdin.lock()) {
            if tx.send(input).is_err() {
                break;
            }
        }
    });

    Ok(rx)
}

/// Play against `opponent` on the process's stdin/stdout.
pub fn play_stdio<O: Opponent + ?Sized>(opponent: &mut O) -> Result<Summary> {
    let inputs = stdin_inputs()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(inputs, &mut out, opponent)
}
