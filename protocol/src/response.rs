use std::fmt;

use serde::{Serialize, Deserialize};
use crate::JsonMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pending,
    Correct,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// The word is meant for the drawer's eyes only.
    RoundStarted {
        round: u32,
        word: String,
        drawer: PlayerId,
    },
    CountDown(u8),
    GuessRejected {
        guess: String,
    },
    RoundResolved {
        outcome: Outcome,
        word: String,
        scorer: Option<PlayerId>,
    },
    ScoreChanged {
        player: PlayerId,
        score: u32,
    },
    Notice {
        msg: String,
    },
    GameEnd(Vec<PlayerState>),
}

impl JsonMessage for Response {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other().other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
    }

    #[test]
    fn response_is_one_json_line() {
        let line = Response::ScoreChanged { player: PlayerId::One, score: 1 }.ser().unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(Response::deser(&line).unwrap(), Response::ScoreChanged { player: PlayerId::One, score: 1 });
    }
}
