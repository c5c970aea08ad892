// Session state: cumulative scores and the two-state game loop
// (awaiting input / terminated). Front ends own one `Session` each and feed
// it user actions one at a time.

use crate::game::{resolve, Move, Opponent, Outcome};
use std::fmt;
use thiserror::Error;

/// One resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingInput,
    Terminated,
}

/// Overall winner of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Player,
    Computer,
    Tie,
}

/// Final tally handed back when a session terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub player: u32,
    pub computer: u32,
    pub ties: u32,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the session has already terminated")]
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Session {
    player: u32,
    computer: u32,
    ties: u32,
    last: Option<Round>,
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            player: 0,
            computer: 0,
            ties: 0,
            last: None,
            state: State::AwaitingInput,
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player
    }

    pub fn computer_score(&self) -> u32 {
        self.computer
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds resolved since the last reset.
    pub fn rounds(&self) -> u64 {
        u64::from(self.player) + u64::from(self.computer) + u64::from(self.ties)
    }

    /// Most recent round, `None` right after start or reset.
    pub fn last(&self) -> Option<Round> {
        self.last
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    /// Play one round: draw the computer's move from `opponent`, resolve it
    /// against `player` and count the outcome.
    pub fn play<O: Opponent + ?Sized>(
        &mut self,
        player: Move,
        opponent: &mut O,
    ) -> Result<Round, SessionError> {
        if self.is_terminated() {
            return Err(SessionError::Terminated);
        }
        let computer = opponent.pick();
        Ok(self.record(player, computer))
    }

    /// Count a round whose computer move is already known.
    fn record(&mut self, player: Move, computer: Move) -> Round {
        let outcome = resolve(player, computer);
        match outcome {
            Outcome::PlayerWin => self.player = self.player.saturating_add(1),
            Outcome::ComputerWin => self.computer = self.computer.saturating_add(1),
            Outcome::Tie => self.ties = self.ties.saturating_add(1),
        }
        let round = Round {
            player,
            computer,
            outcome,
        };
        self.last = Some(round);
        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            self.rounds(),
            player,
            computer,
            outcome,
            self.player,
            self.computer
        );
        round
    }

    /// Zero every counter and forget the last round. The session keeps
    /// accepting moves.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.is_terminated() {
            return Err(SessionError::Terminated);
        }
        log::info!("scores reset at {}-{}", self.player, self.computer);
        self.player = 0;
        self.computer = 0;
        self.ties = 0;
        self.last = None;
        Ok(())
    }

    /// Terminate the session. Calling it again returns the same summary.
    pub fn finish(&mut self) -> Summary {
        if !self.is_terminated() {
            self.state = State::Terminated;
            log::info!("session terminated at {}-{}", self.player, self.computer);
        }
        self.summary()
    }

    pub fn summary(&self) -> Summary {
        let verdict = if self.player > self.computer {
            Verdict::Player
        } else if self.computer > self.player {
            Verdict::Computer
        } else {
            Verdict::Tie
        };
        Summary {
            player: self.player,
            computer: self.computer,
            ties: self.ties,
            verdict,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final score - You: {}  Computer: {}",
            self.player, self.computer
        )?;
        match self.verdict {
            Verdict::Player => write!(f, "You won the game!"),
            Verdict::Computer => write!(f, "Computer won the game!"),
            Verdict::Tie => write!(f, "The game is a tie."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Move);

    impl Opponent for Fixed {
        fn pick(&mut self) -> Move {
            self.0
        }
    }

    #[test]
    fn starts_empty_and_awaiting_input() {
        let session = Session::new();
        assert_eq!(session.state(), State::AwaitingInput);
        assert_eq!((session.player_score(), session.computer_score()), (0, 0));
        assert_eq!(session.last(), None);
    }

    #[test]
    fn three_round_scenario_ends_level() {
        let mut session = Session::new();

        let round = session.play(Move::Rock, &mut Fixed(Move::Scissors)).unwrap();
        assert_eq!(round.outcome, Outcome::PlayerWin);
        assert_eq!((session.player_score(), session.computer_score()), (1, 0));

        let round = session.play(Move::Rock, &mut Fixed(Move::Paper)).unwrap();
        assert_eq!(round.outcome, Outcome::ComputerWin);
        assert_eq!((session.player_score(), session.computer_score()), (1, 1));

        let round = session
            .play(Move::Scissors, &mut Fixed(Move::Scissors))
            .unwrap();
        assert_eq!(round.outcome, Outcome::Tie);
        assert_eq!((session.player_score(), session.computer_score()), (1, 1));

        let summary = session.finish();
        assert_eq!(summary.verdict, Verdict::Tie);
        assert_eq!(summary.ties, 1);
        assert_eq!(
            summary.to_string(),
            "Final score - You: 1  Computer: 1\nThe game is a tie."
        );
    }

    #[test]
    fn counters_add_up_and_never_decrease() {
        let mut session = Session::new();
        let mut previous = (0, 0, 0);
        let mut n = 0;
        for player in Move::ALL {
            for computer in Move::ALL {
                session.play(player, &mut Fixed(computer)).unwrap();
                n += 1;
                let now = (session.player_score(), session.computer_score(), session.ties());
                assert!(now.0 >= previous.0 && now.1 >= previous.1 && now.2 >= previous.2);
                assert_eq!(now.0 + now.1 + now.2, n);
                previous = now;
            }
        }
        assert_eq!(previous, (3, 3, 3));
    }

    #[test]
    fn reset_zeroes_scores_and_keeps_playing() {
        let mut session = Session::new();
        for _ in 0..5 {
            session.play(Move::Paper, &mut Fixed(Move::Rock)).unwrap();
        }
        session.play(Move::Paper, &mut Fixed(Move::Scissors)).unwrap();
        session.reset().unwrap();

        assert_eq!((session.player_score(), session.computer_score()), (0, 0));
        assert_eq!(session.ties(), 0);
        assert_eq!(session.last(), None);
        assert_eq!(session.state(), State::AwaitingInput);

        session.play(Move::Rock, &mut Fixed(Move::Rock)).unwrap();
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn terminated_is_absorbing() {
        let mut session = Session::new();
        session.play(Move::Paper, &mut Fixed(Move::Rock)).unwrap();
        let first = session.finish();

        assert_eq!(
            session.play(Move::Rock, &mut Fixed(Move::Scissors)),
            Err(SessionError::Terminated)
        );
        assert_eq!(session.reset(), Err(SessionError::Terminated));
        assert_eq!(session.finish(), first);
        assert_eq!(first.verdict, Verdict::Player);
        assert_eq!(session.player_score(), 1);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut session = Session::new();
        session.player = u32::MAX;
        session.computer = u32::MAX;
        session.ties = u32::MAX;
        session.play(Move::Rock, &mut Fixed(Move::Scissors)).unwrap();
        session.play(Move::Rock, &mut Fixed(Move::Paper)).unwrap();
        session.play(Move::Rock, &mut Fixed(Move::Rock)).unwrap();
        assert_eq!(session.player_score(), u32::MAX);
        assert_eq!(session.rounds(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn verdict_follows_the_higher_score() {
        let mut session = Session::new();
        session.play(Move::Scissors, &mut Fixed(Move::Rock)).unwrap();
        let summary = session.finish();
        assert_eq!(summary.verdict, Verdict::Computer);
        assert!(summary.to_string().ends_with("Computer won the game!"));
    }
}
