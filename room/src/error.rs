use std::path::PathBuf;

use thiserror::Error;

use crate::consts::MAX_CANVAS_SIDE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("canvas size {width}x{height} is out of range (1..={} per side)", MAX_CANVAS_SIDE)]
    CanvasSize { width: u32, height: u32 },
    #[error("invalid brush in config: {0}")]
    Brush(#[from] canvas::BrushError),
}
