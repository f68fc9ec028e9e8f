use thiserror::Error;

use protocol::Difficulty;
use super::state::Stage;

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("no words available for {0} mode, please choose another difficulty")]
    EmptyLexicon(Difficulty),
    #[error("choose a difficulty first")]
    NoDifficulty,
    #[error("`{request}` is not accepted while {stage}")]
    WrongStage {
        request: &'static str,
        stage: Stage,
    },
    #[error("no round in progress")]
    NoRound,
    #[error(transparent)]
    Brush(#[from] canvas::BrushError),
    #[error(transparent)]
    Lexicon(#[from] lexicon::LexiconError),
}

pub type RoomResult<T> = Result<T, ErrorKind>;
