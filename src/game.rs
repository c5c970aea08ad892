// Game rules: the three moves, the beats-relation and the opponent that
// picks the computer's move. Nothing here touches the terminal so both
// front ends (and the tests) share exactly the same rule.

use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three hand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Result of a single round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

/// Returned when a line of text does not name a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized move: {0:?}")]
pub struct ParseMoveError(pub String);

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `rock|r|paper|p|scissors|s` in any case, ignoring surrounding
/// whitespace.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(s.trim().to_string())),
        }
    }
}

/// Decide a round. Total over all nine pairs and free of side effects.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// Source of the computer's moves. The session only ever asks for one move
/// per round, so a scripted implementation is enough to make games
/// deterministic under test.
pub trait Opponent {
    fn pick(&mut self) -> Move;
}

/// Uniform pick over [`Move::ALL`].
pub struct RandomOpponent<R = ThreadRng> {
    rng: R,
}

impl RandomOpponent<ThreadRng> {
    /// Opponent backed by the thread-local, OS-seeded generator.
    pub fn new() -> Self {
        RandomOpponent { rng: rand::rng() }
    }
}

impl Default for RandomOpponent<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpponent<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomOpponent { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn pick(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn equal_moves_tie_and_nothing_else_does() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(resolve(a, b) == Outcome::Tie, a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn beats_relation_decides_the_winner() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::ComputerWin);
        assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::ComputerWin);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::ComputerWin);
    }

    #[test]
    fn swapping_roles_swaps_the_winner() {
        for a in Move::ALL {
            for b in Move::ALL.into_iter().filter(|b| *b != a) {
                assert_eq!(
                    resolve(a, b) == Outcome::PlayerWin,
                    resolve(b, a) == Outcome::ComputerWin
                );
            }
        }
    }

    #[test]
    fn every_move_beats_exactly_one_other() {
        for m in Move::ALL {
            assert_ne!(m.beats(), m);
            assert_eq!(m.beats().beats().beats(), m);
        }
    }

    #[test]
    fn parses_names_and_abbreviations_in_any_case() {
        assert_eq!("R".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("  PaPeR \n".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("s".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!(
            "banana".parse::<Move>(),
            Err(ParseMoveError("banana".to_string()))
        );
        assert!("".parse::<Move>().is_err());
        assert!("rocks".parse::<Move>().is_err());
    }

    #[test]
    fn random_opponent_covers_all_moves() {
        let mut opponent = RandomOpponent::with_rng(SmallRng::seed_from_u64(7));
        let picks: Vec<Move> = (0..300).map(|_| opponent.pick()).collect();
        for m in Move::ALL {
            assert!(picks.contains(&m), "{m} never picked");
        }
    }
}
