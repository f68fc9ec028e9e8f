use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("word source {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read word source {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the word list is empty")]
    Empty,
}

pub type LexiconResult<T> = Result<T, LexiconError>;
