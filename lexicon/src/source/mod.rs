use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use protocol::Difficulty;
use crate::error::{LexiconError, LexiconResult};

/// Somewhere a raw word list can be read from, keyed by difficulty.
pub trait Source {
    fn read(&self, difficulty: Difficulty) -> LexiconResult<String>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(difficulty.file_name())
    }
}

impl Source for FileSource {
    fn read(&self, difficulty: Difficulty) -> LexiconResult<String> {
        let path = self.path_for(difficulty);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LexiconError::NotFound(path),
            _ => LexiconError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hardmode.txt"), "ocelot, trebuchet").unwrap();

        let source = FileSource::new(dir.path());
        assert_eq!(source.read(Difficulty::Hard).unwrap(), "ocelot, trebuchet");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        match source.read(Difficulty::Easy) {
            Err(LexiconError::NotFound(path)) => assert!(path.ends_with("easymode.txt")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
