// Canvas <-> image file bytes.
// Saving always writes 8-bit RGB PNG (lossless, exact round trip).
// Opening accepts anything the `image` crate can sniff; alpha is dropped.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader};

use crate::buffer::PixelBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::types::Color;

/// Encode the whole canvas as PNG.
pub fn encode(buf: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let (w, h) = buf.dimensions();
    let to_u32 = |v: usize| u32::try_from(v).map_err(|_| EncodeError(format!("dimension {v} too large")));
    let (w32, h32) = (to_u32(w)?, to_u32(h)?);

    // 3 bytes per pixel, same row-major order the buffer iterates in.
    let mut raw = Vec::with_capacity(w * h * 3);
    for (_x, _y, c) in buf.pixels() {
        raw.extend_from_slice(&[c.r, c.g, c.b]);
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&raw, w32, h32, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError(e.to_string()))?;
    Ok(out)
}

/// Decode image bytes into a fresh canvas sized to the image.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupt(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::UnrecognizedFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnrecognizedFormat,
        other => DecodeError::Corrupt(other.to_string()),
    })?;

    let rgb = img.into_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(DecodeError::InvalidDimension);
    }
    let pixels = rgb.pixels().map(|p| Color::rgb(p[0], p[1], p[2]));
    PixelBuffer::from_pixels(w as usize, h as usize, pixels).map_err(|_| DecodeError::InvalidDimension)
}
