use image::{Rgb, RgbImage};

use protocol::Point;

/// Round-capped, anti-aliased segment. Coverage is the distance from each
/// pixel centre to the segment, feathered over one pixel.
pub(crate) fn draw_segment(image: &mut RgbImage, from: Point, to: Point, color: Rgb<u8>, width: f32) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let radius = width / 2.0;
    let (x0, y0) = (from.x as f32, from.y as f32);
    let (x1, y1) = (to.x as f32, to.y as f32);

    let pad = radius + 1.0;
    let max_x = image.width() as f32 - 1.0;
    let max_y = image.height() as f32 - 1.0;
    let left = (x0.min(x1) - pad).floor().clamp(0.0, max_x) as u32;
    let right = (x0.max(x1) + pad).ceil().clamp(0.0, max_x) as u32;
    let top = (y0.min(y1) - pad).floor().clamp(0.0, max_y) as u32;
    let bottom = (y0.max(y1) + pad).ceil().clamp(0.0, max_y) as u32;

    for y in top..=bottom {
        for x in left..=right {
            let d = distance_to_segment(x as f32, y as f32, (x0, y0), (x1, y1));
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(image.get_pixel_mut(x, y), color, coverage);
            }
        }
    }
}

fn distance_to_segment(px: f32, py: f32, (x0, y0): (f32, f32), (x1, y1): (f32, f32)) -> f32 {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (x0 + t * dx, y0 + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

fn blend(dst: &mut Rgb<u8>, src: Rgb<u8>, alpha: f32) {
    for (d, s) in dst.0.iter_mut().zip(src.0) {
        *d = (*d as f32 * (1.0 - alpha) + s as f32 * alpha).round() as u8;
    }
}
