// Window shell around the canvas.
// Visual effects provided here:
// 1) A window that shows the canvas pixels 1:1.
// 2) Mouse button polling turned into press / drag / release events.
// 3) Tool and status text in the window title (our "status line").

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use notpaint::error::AppError;
use notpaint::{PixelBuffer, StrokePoint};

pub struct Drawer {
    window: Window, // the on-screen window you see
    title: String,  // last title pushed, so we only touch it on change
}

impl Drawer {
    /// Create a window exactly the size of the canvas.
    /// Visual: a new window appears; canvas pixels map 1:1 to window pixels.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, AppError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| AppError::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            title: title.to_owned(),
        })
    }

    /// Push the canvas to the screen.
    pub fn present(&mut self, canvas: &PixelBuffer) -> Result<(), AppError> {
        let (w, h) = canvas.dimensions();
        self.window
            .update_with_buffer(canvas.as_packed(), w, h)
            .map_err(|e| AppError::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in canvas pixels. Not clamped: a drag may leave the canvas.
    pub fn mouse_pos(&self) -> Option<StrokePoint> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| StrokePoint::new(x.floor() as i32, y.floor() as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn key_pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    pub fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.window.set_title(title);
            self.title = title.to_owned();
        }
    }
}

/// Edge of the left mouse button, as the session wants to hear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(StrokePoint),
    Drag(StrokePoint),
    Release,
}

/// Turns per-frame polling (button held? where?) into discrete events.
/// A drag is only reported when the position actually changed.
#[derive(Debug, Default)]
pub struct PointerTracker {
    held_at: Option<StrokePoint>,
}

impl PointerTracker {
    pub fn update(&mut self, down: bool, pos: Option<StrokePoint>) -> Option<PointerEvent> {
        match (self.held_at, down, pos) {
            (None, true, Some(p)) => {
                self.held_at = Some(p);
                Some(PointerEvent::Press(p))
            }
            (Some(last), true, Some(p)) if p != last => {
                self.held_at = Some(p);
                Some(PointerEvent::Drag(p))
            }
            (Some(_), false, _) => {
                self.held_at = None;
                Some(PointerEvent::Release)
            }
            _ => None,
        }
    }

    /// Forget any held button (e.g. after the window is rebuilt).
    pub fn reset(&mut self) {
        self.held_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polling_becomes_press_drag_release() {
        let mut t = PointerTracker::default();
        let p = |x, y| Some(StrokePoint::new(x, y));
        assert_eq!(t.update(false, p(1, 1)), None);
        assert_eq!(t.update(true, p(1, 1)), Some(PointerEvent::Press(StrokePoint::new(1, 1))));
        assert_eq!(t.update(true, p(1, 1)), None);
        assert_eq!(t.update(true, p(4, 2)), Some(PointerEvent::Drag(StrokePoint::new(4, 2))));
        assert_eq!(t.update(true, None), None);
        assert_eq!(t.update(false, None), Some(PointerEvent::Release));
        assert_eq!(t.update(false, p(4, 2)), None);
    }

    #[test]
    fn reset_drops_held_button() {
        let mut t = PointerTracker::default();
        t.update(true, Some(StrokePoint::new(0, 0)));
        t.reset();
        assert_eq!(t.update(false, None), None);
    }
}
