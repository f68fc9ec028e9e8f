use std::fmt;

use protocol::{Outcome, PlayerId};

use crate::consts::ROUND_SECS;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    DrawerReveal,
    Guessing,
    Resolved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Idle => "no game is running",
            Stage::DrawerReveal => "the drawer is reading the word",
            Stage::Guessing => "guessing",
            Stage::Resolved => "the round is being scored",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub round: u32,
    pub drawer: PlayerId,
    pub players: [Player; 2],
    pub word: String,
    pub countdown: u8,
    pub outcome: Outcome,
}

impl Session {
    pub fn new(round: u32, word: impl Into<String>) -> Self {
        Self {
            round,
            drawer: PlayerId::One,
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
            word: word.into(),
            countdown: ROUND_SECS,
            outcome: Outcome::Pending,
        }
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.players[player.index()].score
    }

    pub fn tick(&self, remaining: u8) -> Self {
        Self {
            countdown: self.countdown.min(remaining),
            ..self.clone()
        }
    }

    /// Credits the current drawer. Call before `advance_turn`.
    pub fn record_correct_guess(&self) -> Self {
        let mut next = self.clone();
        next.players[self.drawer.index()].add_point();
        next.outcome = Outcome::Correct;
        next
    }

    pub fn expire(&self) -> Self {
        Self {
            outcome: Outcome::Expired,
            ..self.clone()
        }
    }

    pub fn advance_turn(&self, word: impl Into<String>) -> Self {
        Self {
            round: self.round + 1,
            drawer: self.drawer.other(),
            players: self.players.clone(),
            word: word.into(),
            countdown: ROUND_SECS,
            outcome: Outcome::Pending,
        }
    }
}

pub struct State {
    pub stage: Stage,
    pub session: Option<Session>,
}

impl State {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            session: None,
        }
    }
}
