// Core value types: colors, brush sizes, pointer samples.

use crate::error::SessionError;

/// Opaque RGB color. Equality is per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB (the layout minifb presents).
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`Color::to_packed`]; the top byte is ignored.
    #[inline]
    pub const fn from_packed(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }

    /// Look up one of the palette colors by name, ignoring case.
    pub fn named(name: &str) -> Option<Self> {
        PALETTE
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

/// The color menu, in menu order. The first entry is the default.
pub const PALETTE: [(&str, Color); 4] = [
    ("Black", Color::BLACK),
    ("Red", Color::RED),
    ("Green", Color::GREEN),
    ("Blue", Color::BLUE),
];

/// The brush size menu. The first entry is the default.
pub const BRUSH_SIZES: [u32; 4] = [1, 3, 5, 7];

/// Stroke width in pixels, between [`BrushSize::MIN`] and [`BrushSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrushSize(u32);

impl BrushSize {
    pub const MIN: BrushSize = BrushSize(1);
    pub const MAX: BrushSize = BrushSize(4096);

    pub fn new(px: u32) -> Result<Self, SessionError> {
        if px < Self::MIN.0 {
            return Err(SessionError::InvalidBrushSize(px));
        }
        if px > Self::MAX.0 {
            return Err(SessionError::BrushTooLarge { size: px, max: Self::MAX.0 });
        }
        Ok(Self(px))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Radius of the disc stamped on each center pixel; 0 means a bare line.
    pub fn radius(self) -> i64 {
        i64::from(self.0 / 2)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(BRUSH_SIZES[0])
    }
}

/// A pointer sample in canvas pixel space. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokePoint {
    pub x: i32,
    pub y: i32,
}

impl StrokePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
