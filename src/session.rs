// Drawing session: tool state, the press/drag/release state machine,
// and open/save. One session owns one canvas; nothing else mutates it.

use std::path::Path;

use log::{debug, info, warn};

use crate::buffer::PixelBuffer;
use crate::codec;
use crate::error::{BufferError, LoadError, SaveError, SessionError};
use crate::storage::{FsStorage, Storage};
use crate::stroke;
use crate::types::{BrushSize, Color, StrokePoint, PALETTE};

/// What a click without any drag leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickDot {
    /// Stamp one brush-sized dot on release.
    #[default]
    Paint,
    /// Paint nothing; only motion draws.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub click_dot: ClickDot,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: Color::WHITE,
            click_dot: ClickDot::Paint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrokeState {
    Idle,
    InProgress { last: StrokePoint, moved: bool },
}

pub struct DrawingSession<S: Storage = FsStorage> {
    buffer: PixelBuffer,
    color: Color,
    size: BrushSize,
    stroke: StrokeState,
    click_dot: ClickDot,
    storage: S,
}

impl DrawingSession<FsStorage> {
    pub fn new(config: &SessionConfig) -> Result<Self, BufferError> {
        Self::with_storage(config, FsStorage)
    }
}

impl<S: Storage> DrawingSession<S> {
    /// Blank canvas, first palette color, smallest brush.
    pub fn with_storage(config: &SessionConfig, storage: S) -> Result<Self, BufferError> {
        let buffer = PixelBuffer::new(config.width, config.height, config.background)?;
        Ok(Self {
            buffer,
            color: default_color(),
            size: BrushSize::default(),
            stroke: StrokeState::Idle,
            click_dot: config.click_dot,
            storage,
        })
    }

    pub fn current_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> BrushSize {
        self.size
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.stroke, StrokeState::InProgress { .. })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Pointer pressed. Nothing is drawn until motion or release.
    pub fn begin_stroke(&mut self, x: i32, y: i32) {
        debug!("stroke begin at ({x}, {y})");
        self.stroke = StrokeState::InProgress {
            last: StrokePoint::new(x, y),
            moved: false,
        };
    }

    /// Pointer dragged: paint from the last sample to this one. Ignored when idle.
    pub fn extend_stroke(&mut self, x: i32, y: i32) {
        let StrokeState::InProgress { last, .. } = self.stroke else {
            return;
        };
        stroke::draw_segment(&mut self.buffer, last.x, last.y, x, y, self.color, self.size);
        self.stroke = StrokeState::InProgress {
            last: StrokePoint::new(x, y),
            moved: true,
        };
    }

    /// Pointer released.
    pub fn end_stroke(&mut self) {
        if let StrokeState::InProgress { last, moved } = self.stroke {
            if !moved && self.click_dot == ClickDot::Paint {
                stroke::draw_dot(&mut self.buffer, last.x, last.y, self.color, self.size);
            }
            debug!("stroke end at ({}, {})", last.x, last.y);
        }
        self.stroke = StrokeState::Idle;
    }

    /// Applies from the next segment on.
    pub fn set_color(&mut self, color: Color) {
        debug!("color -> {color:?}");
        self.color = color;
    }

    /// Applies from the next segment on.
    pub fn set_brush_size(&mut self, px: u32) -> Result<(), SessionError> {
        self.size = BrushSize::new(px)?;
        debug!("brush size -> {px}");
        Ok(())
    }

    /// Encode the canvas and hand it to storage. The canvas is only read.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let bytes = codec::encode(&self.buffer).inspect_err(|e| warn!("save failed: {e}"))?;
        self.storage.write(path, &bytes).map_err(|source| {
            warn!("save to {} failed: {source}", path.display());
            SaveError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!("canvas saved as '{}' ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Replace the canvas with the image at `path` and reset the tools.
    /// On any error the current canvas is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let bytes = self.storage.read(path).map_err(|source| {
            warn!("open {} failed: {source}", path.display());
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let buffer = codec::decode(&bytes).inspect_err(|e| warn!("open {} failed: {e}", path.display()))?;

        let (w, h) = buffer.dimensions();
        self.buffer = buffer;
        self.color = default_color();
        self.size = BrushSize::default();
        self.stroke = StrokeState::Idle;
        info!("opened '{}' ({w}x{h})", path.display());
        Ok(())
    }
}

fn default_color() -> Color {
    PALETTE[0].1
}
