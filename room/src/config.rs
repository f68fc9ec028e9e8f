use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use canvas::Brush;
use lexicon::FileSource;

use crate::consts::{CONFIG_DIR, CONFIG_FILE, MAX_CANVAS_SIDE};
use crate::error::ConfigError;
use crate::room;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub words_dir: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_size: u8,
    pub brush_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from("words"),
            canvas_width: canvas::DEFAULT_WIDTH,
            canvas_height: canvas::DEFAULT_HEIGHT,
            brush_size: canvas::brush::DEFAULT_SIZE,
            brush_color: "#2C3E50".to_string(),
        }
    }
}

impl Settings {
    /// An explicit path must exist. Without one the platform config dir is
    /// tried, and a missing file there just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|base| base.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(settings)
    }

    pub fn room_config(&self, seed: Option<u64>) -> Result<room::Config, ConfigError> {
        let (width, height) = (self.canvas_width, self.canvas_height);
        if !(1..=MAX_CANVAS_SIDE).contains(&width) || !(1..=MAX_CANVAS_SIDE).contains(&height) {
            return Err(ConfigError::CanvasSize { width, height });
        }
        let mut config = room::Config::new(FileSource::new(&self.words_dir));
        config.canvas_size = (width, height);
        config.brush = Brush::new(self.brush_size, &self.brush_color)?;
        config.seed = seed;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_keys_take_defaults() {
        let settings: Settings = toml::from_str("words_dir = \"/usr/share/dng\"\nbrush_size = 5\n").unwrap();
        assert_eq!(settings.words_dir, PathBuf::from("/usr/share/dng"));
        assert_eq!(settings.brush_size, 5);
        assert_eq!(settings.canvas_width, 1000);
        assert_eq!(settings.canvas_height, 700);
        assert_eq!(settings.brush_color, "#2C3E50");
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn bad_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "canvas_width = \"wide\"").unwrap();
        assert!(matches!(Settings::load(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn builds_room_config() {
        let settings = Settings {
            canvas_width: 320,
            canvas_height: 200,
            brush_color: "emerald".to_string(),
            ..Settings::default()
        };
        let config = settings.room_config(Some(3)).unwrap();
        assert_eq!(config.canvas_size, (320, 200));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.round_secs, 60);
        assert_eq!(config.source.dir(), Path::new("words"));

        let bad = Settings { brush_size: 99, ..Settings::default() };
        assert!(matches!(bad.room_config(None), Err(ConfigError::Brush(_))));
    }

    #[test]
    fn canvas_size_must_be_sane() {
        for (canvas_width, canvas_height) in [(0, 700), (1000, 0), (1000, u32::MAX), (MAX_CANVAS_SIDE + 1, 700)] {
            let settings = Settings { canvas_width, canvas_height, ..Settings::default() };
            assert!(matches!(
                settings.room_config(None),
                Err(ConfigError::CanvasSize { width, height }) if width == canvas_width && height == canvas_height
            ));
        }

        let edge = Settings { canvas_width: 1, canvas_height: MAX_CANVAS_SIDE, ..Settings::default() };
        assert_eq!(edge.room_config(None).unwrap().canvas_size, (1, MAX_CANVAS_SIDE));
    }
}
