// Error types for the canvas core and the window shell.
// Every variant states *where* things went wrong; the shell decides how to show it.
use std::io;
use std::path::PathBuf;

/// Pixel buffer construction and access.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Bytes could not be turned into a canvas.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unrecognized image format")]
    UnrecognizedFormat,
    #[error("corrupt image data: {0}")]
    Corrupt(String),
    #[error("image has no pixels")]
    InvalidDimension,
}

/// The encoder itself failed (never caused by pixel contents).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("encoding failed: {0}")]
pub struct EncodeError(pub String);

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("could not write '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not read '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("brush size must be at least 1, got {0}")]
    InvalidBrushSize(u32),
    #[error("brush size {size} is larger than the maximum {max}")]
    BrushTooLarge { size: u32, max: u32 },
}

/// Failures of the windowed app. Save/open errors are shown, not returned here.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
