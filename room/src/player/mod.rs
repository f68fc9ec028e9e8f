use protocol::{PlayerId, PlayerState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) score: u32,
}

impl Player {
    pub(crate) fn new(id: PlayerId) -> Self {
        Self { id, score: 0 }
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1
    }

    pub(crate) fn get_state(&self) -> PlayerState {
        PlayerState {
            id: self.id,
            score: self.score,
        }
    }
}
