pub mod request;
pub mod response;
pub mod error;
pub mod lexicon;

pub use response::*;
pub use request::*;
pub use lexicon::Difficulty;
pub use error::ParseDifficultyError;

use serde::{Serialize, de::DeserializeOwned};

/// One message per line, so a UI can sit on the other end of a pipe.
pub trait JsonMessage: Serialize + DeserializeOwned {
    fn deser(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(line)
    }

    fn ser(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
