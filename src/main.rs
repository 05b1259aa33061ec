// What you SEE:
// • A white canvas. Hold Left Mouse and drag to paint.
// • 1-4 pick Black / Red / Green / Blue. F1-F4 pick brush size 1 / 3 / 5 / 7.
// • S saves to --file, O opens --file. ESC quits.
// • The window title shows the current tool and the last save/open result.

mod draw;

use clap::Parser;
use draw::{Drawer, PointerEvent, PointerTracker};
use log::info;
use minifb::Key;
use notpaint::config::Args;
use notpaint::error::AppError;
use notpaint::storage::FsStorage;
use notpaint::types::{BRUSH_SIZES, PALETTE};
use notpaint::DrawingSession;

const APP_NAME: &str = "NotPaint";
const COLOR_KEYS: [Key; 4] = [Key::Key1, Key::Key2, Key::Key3, Key::Key4];
const SIZE_KEYS: [Key; 4] = [Key::F1, Key::F2, Key::F3, Key::F4];

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut session = DrawingSession::new(&args.session_config())?;
    let mut status = String::new();
    if args.open {
        // A bad startup file is reported, not fatal: we keep the blank canvas.
        if let Err(e) = session.load(&args.file) {
            status = format!("Error opening file: {e}");
        }
    }

    let (w, h) = session.current_buffer().dimensions();
    let mut drawer = Drawer::new(APP_NAME, w, h)?;
    let mut pointer = PointerTracker::default();
    info!("canvas {w}x{h}, file {}", args.file.display());

    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Tool menu keys */
        for (key, &(label, color)) in COLOR_KEYS.iter().zip(PALETTE.iter()) {
            if drawer.key_pressed_once(*key) {
                session.set_color(color);
                status = format!("Color: {label}");
            }
        }
        for (key, &size) in SIZE_KEYS.iter().zip(BRUSH_SIZES.iter()) {
            if drawer.key_pressed_once(*key) {
                status = match session.set_brush_size(size) {
                    Ok(()) => format!("Brush size: {size}"),
                    Err(e) => e.to_string(),
                };
            }
        }

        /* 2) File menu keys */
        if drawer.key_pressed_once(Key::S) {
            status = match session.save(&args.file) {
                Ok(()) => format!("Canvas saved as '{}'", args.file.display()),
                Err(e) => format!("Save failed: {e}"),
            };
        }
        if drawer.key_pressed_once(Key::O) {
            status = open(&mut session, &args, &mut drawer, &mut pointer)?;
        }

        /* 3) Pointer: press / drag / release drive the stroke */
        match pointer.update(drawer.left_mouse_down(), drawer.mouse_pos()) {
            Some(PointerEvent::Press(p)) => session.begin_stroke(p.x, p.y),
            Some(PointerEvent::Drag(p)) => session.extend_stroke(p.x, p.y),
            Some(PointerEvent::Release) => session.end_stroke(),
            None => {}
        }

        /* 4) Status line + present */
        drawer.set_title(&title(&session, &status));
        drawer.present(session.current_buffer())?;
    }

    Ok(())
}

/// Open --file. If the canvas size changed, the window is rebuilt to match.
fn open(
    session: &mut DrawingSession<FsStorage>,
    args: &Args,
    drawer: &mut Drawer,
    pointer: &mut PointerTracker,
) -> Result<String, AppError> {
    let old = session.current_buffer().dimensions();
    if let Err(e) = session.load(&args.file) {
        return Ok(format!("Error opening file: {e}"));
    }
    let (w, h) = session.current_buffer().dimensions();
    if (w, h) != old {
        *drawer = Drawer::new(APP_NAME, w, h)?;
    }
    pointer.reset();
    Ok(format!("Opened '{}' ({w}x{h})", args.file.display()))
}

fn title(session: &DrawingSession<FsStorage>, status: &str) -> String {
    let color = PALETTE
        .iter()
        .find(|(_, c)| *c == session.color())
        .map_or("Custom", |&(label, _)| label);
    let size = session.brush_size().get();
    if status.is_empty() {
        format!("{APP_NAME} | {color}, size {size}")
    } else {
        format!("{APP_NAME} | {color}, size {size} | {status}")
    }
}
