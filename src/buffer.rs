// The canvas pixels. This is the only place the picture lives.
// Pixels are kept packed as 0x00RRGGBB so the window can show them as-is.

use crate::error::BufferError;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>, // length = width * height, row-major
}

impl PixelBuffer {
    /// Largest accepted width or height.
    pub const MAX_DIMENSION: usize = 16_384;

    /// A blank canvas with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self, BufferError> {
        let invalid = BufferError::InvalidDimension { width, height };
        if width == 0 || height == 0 || width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(invalid);
        }
        let len = width * height;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| invalid)?;
        pixels.resize(len, fill.to_packed());
        Ok(Self { width, height, pixels })
    }

    /// Build a canvas from row-major colors (used by the decoder).
    pub(crate) fn from_pixels(
        width: usize,
        height: usize,
        pixels: impl IntoIterator<Item = Color>,
    ) -> Result<Self, BufferError> {
        let mut buf = Self::new(width, height, Color::BLACK)?;
        let mut n = 0;
        for (dst, c) in buf.pixels.iter_mut().zip(pixels) {
            *dst = c.to_packed();
            n += 1;
        }
        if n != buf.pixels.len() {
            return Err(BufferError::InvalidDimension { width, height });
        }
        Ok(buf)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True if (x, y) addresses a pixel of this canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, BufferError> {
        if !self.contains(x, y) {
            return Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Color, BufferError> {
        let idx = self.index(x, y)?;
        Ok(Color::from_packed(self.pixels[idx]))
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), BufferError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color.to_packed();
        Ok(())
    }

    /// Write a pixel the caller has already clipped to the canvas.
    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color.to_packed();
    }

    /// Every pixel as (x, y, color), y outer and x inner. The codec relies on
    /// this order. Calling it again restarts from (0, 0).
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &px)| (i % w, i / w, Color::from_packed(px)))
    }

    /// Raw 0x00RRGGBB slice for presenting to the window.
    pub fn as_packed(&self) -> &[u32] {
        &self.pixels
    }
}
