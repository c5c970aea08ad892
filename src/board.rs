// Stateless render step for the arcade screen: maps a `Session` to the
// strings and tones that get drawn. No terminal types leak in here except
// the color a tone resolves to.

use crate::game::{Move, Outcome};
use crate::session::Session;
use crossterm::style::Color;

pub const IDLE_BANNER: &str = ">>> MAKE YOUR CHOICE <<<";
pub const TIE_BANNER: &str = ">>> DRAW! TRY AGAIN <<<";
pub const WIN_BANNER: &str = "*** PLAYER WINS! ***";
pub const LOSE_BANNER: &str = "*** CPU WINS! ***";
pub const NO_MOVE: &str = "???";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Win,
    Lose,
    Draw,
}

impl Tone {
    /// `None` means "leave the terminal's default color alone".
    pub fn color(self, enabled: bool) -> Option<Color> {
        if !enabled {
            return None;
        }
        Some(match self {
            Tone::Win => Color::Cyan,
            Tone::Lose => Color::Magenta,
            Tone::Draw => Color::Yellow,
        })
    }
}

/// Everything the arcade screen shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub player_score: String,
    pub computer_score: String,
    pub player_move: String,
    pub computer_move: String,
    pub banner: &'static str,
    pub tone: Tone,
}

fn move_label(m: Move) -> String {
    m.name().to_ascii_uppercase()
}

impl From<&Session> for Board {
    fn from(session: &Session) -> Self {
        let (player_move, computer_move, banner, tone) = match session.last() {
            None => (NO_MOVE.to_string(), NO_MOVE.to_string(), IDLE_BANNER, Tone::Draw),
            Some(round) => {
                let (banner, tone) = match round.outcome {
                    Outcome::Tie => (TIE_BANNER, Tone::Draw),
                    Outcome::PlayerWin => (WIN_BANNER, Tone::Win),
                    Outcome::ComputerWin => (LOSE_BANNER, Tone::Lose),
                };
                (move_label(round.player), move_label(round.computer), banner, tone)
            }
        };
        Board {
            player_score: format!("{:03}", session.player_score()),
            computer_score: format!("{:03}", session.computer_score()),
            player_move,
            computer_move,
            banner,
            tone,
        }
    }
}
