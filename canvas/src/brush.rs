use image::Rgb;

use crate::error::BrushError;

pub const MIN_SIZE: u8 = 2;
pub const MAX_SIZE: u8 = 10;
pub const DEFAULT_SIZE: u8 = 3;

/// Midnight blue.
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([0x2C, 0x3E, 0x50]);

pub const PALETTE: [(&str, Rgb<u8>); 6] = [
    ("midnight blue", DEFAULT_COLOR),
    ("pomegranate", Rgb([0xC0, 0x39, 0x2B])),
    ("emerald", Rgb([0x27, 0xAE, 0x60])),
    ("orange", Rgb([0xD3, 0x54, 0x00])),
    ("purple", Rgb([0x8E, 0x44, 0xAD])),
    ("black", Rgb([0x00, 0x00, 0x00])),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    size: u8,
    color: Rgb<u8>,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR,
        }
    }
}

impl Brush {
    pub fn new(size: u8, color: &str) -> Result<Self, BrushError> {
        let mut brush = Self::default();
        brush.set_size(size)?;
        brush.set_color(color)?;
        Ok(brush)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn set_size(&mut self, size: u8) -> Result<(), BrushError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BrushError::Size(size));
        }
        self.size = size;
        Ok(())
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), BrushError> {
        self.color = parse_color(color)?;
        Ok(())
    }
}

/// Accepts a palette name (any case, spaces optional) or `#RRGGBB`.
pub fn parse_color(text: &str) -> Result<Rgb<u8>, BrushError> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                return Ok(Rgb([r, g, b]));
            }
        }
        return Err(BrushError::Color(text.to_string()));
    }

    let wanted: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    PALETTE
        .iter()
        .find(|(name, _)| name.replace(' ', "") == wanted)
        .map(|(_, color)| *color)
        .ok_or_else(|| BrushError::Color(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names() {
        assert_eq!(parse_color("Emerald"), Ok(Rgb([0x27, 0xAE, 0x60])));
        assert_eq!(parse_color("Midnight Blue"), Ok(DEFAULT_COLOR));
        assert_eq!(parse_color("midnightblue"), Ok(DEFAULT_COLOR));
    }

    #[test]
    fn hex_colours() {
        assert_eq!(parse_color("#c0392b"), Ok(Rgb([0xC0, 0x39, 0x2B])));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("teal").is_err());
    }

    #[test]
    fn size_bounds() {
        let mut brush = Brush::default();
        assert_eq!(brush.size(), 3);
        assert_eq!(brush.set_size(1), Err(BrushError::Size(1)));
        assert_eq!(brush.set_size(11), Err(BrushError::Size(11)));
        brush.set_size(10).unwrap();
        assert_eq!(brush.size(), 10);
    }
}
