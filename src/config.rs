// Command-line options for the windowed app.

use std::path::PathBuf;

use clap::Parser;

use crate::session::{ClickDot, SessionConfig};
use crate::types::Color;

#[derive(Parser, Debug, Clone)]
#[command(name = "notpaint")]
#[command(about = "Minimal freehand raster painter")]
#[command(version)]
pub struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value = "1000")]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value = "500")]
    pub height: usize,

    /// PNG file used by Save (S) and Open (O)
    #[arg(short, long, default_value = "canvas.png")]
    pub file: PathBuf,

    /// Open --file at startup instead of a blank canvas
    #[arg(long)]
    pub open: bool,

    /// A click without dragging paints nothing
    #[arg(long)]
    pub no_click_dots: bool,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            background: Color::WHITE,
            click_dot: if self.no_click_dots { ClickDot::Skip } else { ClickDot::Paint },
        }
    }
}
