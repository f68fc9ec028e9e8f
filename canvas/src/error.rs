use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to export drawing")]
    Export(#[from] image::ImageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrushError {
    #[error("brush size {0} is out of range ({min}..={max})", min = crate::brush::MIN_SIZE, max = crate::brush::MAX_SIZE)]
    Size(u8),
    #[error("unknown colour `{0}`")]
    Color(String),
}
