//! Bitmap drawing surface. Strokes are painted straight into the pixels;
//! nothing is kept that would allow undoing one.

pub mod brush;
mod error;
mod raster;

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::{debug, info};

pub use brush::Brush;
pub use error::{BrushError, CanvasError};
pub use image;
pub use protocol::Point;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 700;
pub const BACKGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

pub struct Canvas {
    image: RgbImage,
    brush: Brush,
    last_point: Option<Point>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            brush: Brush::default(),
            last_point: None,
        }
    }

    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.image.width()
            && (point.y as u32) < self.image.height()
    }

    pub fn is_stroking(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn begin_stroke(&mut self, point: Point) -> bool {
        if !self.contains(point) {
            debug!(?point, "stroke start outside the surface");
            return false;
        }
        self.last_point = Some(point);
        true
    }

    /// Draws from the last recorded point. Off-surface points are dropped
    /// and the last point is kept.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        let Some(from) = self.last_point else {
            return false;
        };
        if !self.contains(point) {
            return false;
        }
        raster::draw_segment(&mut self.image, from, point, self.brush.color(), self.brush.size() as f32);
        self.last_point = Some(point);
        true
    }

    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = BACKGROUND;
        }
        self.last_point = None;
    }

    /// Format follows the file extension. No path means the save was
    /// cancelled, which is not an error.
    pub fn export(&self, path: Option<&Path>) -> Result<(), CanvasError> {
        let Some(path) = path else {
            return Ok(());
        };
        self.image.save(path)?;
        info!(path = %path.display(), "drawing exported");
        Ok(())
    }
}
