// notpaint: a freehand painter's canvas core.
// The window shell (src/main.rs + draw.rs) only translates input into
// DrawingSession calls and shows `current_buffer()`.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod stroke;
pub mod types;

pub use buffer::PixelBuffer;
pub use error::{BufferError, DecodeError, EncodeError, LoadError, SaveError, SessionError};
pub use session::{ClickDot, DrawingSession, SessionConfig};
pub use types::{BrushSize, Color, StrokePoint};
