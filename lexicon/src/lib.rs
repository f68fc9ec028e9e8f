//! Word bank for the drawing game.
//!
//! A word list is a single comma separated line per difficulty. Tokens are
//! trimmed and empty ones dropped; file order is kept.

mod error;
mod source;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

pub use error::{LexiconError, LexiconResult};
pub use protocol::Difficulty;
pub use source::{FileSource, Source};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    pub fn parse(text: &str) -> Self {
        let words = text
            .split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Never fails: an unreadable source is logged and gives an empty list.
    pub fn load(source: &impl Source, difficulty: Difficulty) -> Self {
        match source.read(difficulty) {
            Ok(text) => {
                let lexicon = Self::parse(&text);
                info!(%difficulty, words = lexicon.len(), "word list loaded");
                lexicon
            }
            Err(err) => {
                warn!(%difficulty, error = %err, "word list unavailable, continuing with no words");
                Self::default()
            }
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn next_word<R: Rng + ?Sized>(&self, rng: &mut R) -> LexiconResult<&str> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or(LexiconError::Empty)
    }
}
