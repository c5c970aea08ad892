// Arcade mode: the button-driven variant as a full-screen terminal board.
// Keys stand in for the buttons; every key press is one synchronous action
// on the session followed by a redraw from `Board`.

use crate::board::Board;
use crate::game::{Move, Opponent};
use crate::session::{Session, Summary};
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Write};

/// A button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(Move),
    Reset,
    Quit,
}

/// Map a key event to a button. Releases and unbound keys map to nothing.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => Some(Action::Play(Move::Rock)),
            'p' => Some(Action::Play(Move::Paper)),
            's' => Some(Action::Play(Move::Scissors)),
            'x' => Some(Action::Reset),
            'q' => Some(Action::Quit),
            _ => None,
        },
        KeyCode::Backspace => Some(Action::Reset),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Apply one button press. Returns `false` once the session has terminated.
pub fn press<O: Opponent + ?Sized>(
    session: &mut Session,
    action: Action,
    opponent: &mut O,
) -> Result<bool> {
    match action {
        Action::Play(m) => {
            session.play(m, opponent)?;
        }
        Action::Reset => session.reset()?,
        Action::Quit => {
            session.finish();
            return Ok(false);
        }
    }
    Ok(true)
}

/// Raw mode plus alternate screen, undone on drop so every exit path leaves
/// the terminal usable.
struct Screen {
    out: io::Stdout,
}

impl Screen {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;
        Ok(Screen { out })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn line<W: Write>(out: &mut W, row: u16, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(2, row), Print(text))
}

fn draw<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;

    queue!(out, SetAttribute(Attribute::Bold))?;
    line(out, 1, "ROCK PAPER SCISSORS")?;
    queue!(out, SetAttribute(Attribute::Reset))?;
    line(out, 2, "[ ARCADE MODE ]")?;

    line(out, 4, &format!("{:<14}{:^6}{:<14}", "[ PLAYER ]", "VS", "[ CPU ]"))?;
    line(
        out,
        5,
        &format!("{:<14}{:^6}{:<14}", board.player_score, "", board.computer_score),
    )?;

    line(out, 7, &format!("{:<20}{:<20}", "[ YOUR MOVE ]", "[ CPU MOVE ]"))?;
    line(out, 8, &format!("{:<20}{:<20}", board.player_move, board.computer_move))?;

    if let Some(c) = board.tone.color(color) {
        queue!(out, SetForegroundColor(c))?;
    }
    line(out, 10, board.banner)?;
    queue!(out, ResetColor)?;

    line(out, 12, "[R] ROCK    [P] PAPER    [S] SCISSORS")?;
    line(out, 13, "[X] RESET   [Q] QUIT")?;
    out.flush()
}

/// Run the arcade board until the player quits, then print the standard
/// summary on the normal screen.
pub fn run<O: Opponent + ?Sized>(opponent: &mut O, color: bool) -> Result<Summary> {
    let mut session = Session::new();
    log::info!("arcade session started");
    {
        let mut screen = Screen::enter()?;
        loop {
            draw(&mut screen.out, &Board::from(&session), color)?;
            let key = match event::read()? {
                Event::Key(key) => key,
                _ => continue,
            };
            let Some(action) = action_for(key) else {
                continue;
            };
            if !press(&mut session, action, opponent)? {
                break;
            }
        }
    }
    let summary = session.finish();
    println!("{}", summary);
    Ok(summary)
}
