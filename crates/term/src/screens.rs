//! Static screens: the mode menu and the Asteroids placeholder.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::fill_rect;
use crate::types::Viewport;

const ENTRY: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const HINT: CellStyle = CellStyle::fg(Rgb::new(130, 130, 130));

pub const MENU_ENTRIES: [&str; 3] = ["T. Test Bed", "S. Snake", "A. Asteroids"];

pub fn render_menu(fb: &mut FrameBuffer, vp: Viewport) {
    let x = vp.x + 5;
    let mut y = vp.y + 4;
    for entry in MENU_ENTRIES {
        fb.put_str_at(x, y, entry, ENTRY.reversed());
        y += 1;
    }
    fb.put_str_at(x, y + 1, "P debug overlay   Esc menu   Backspace quit", HINT);
}

/// Asteroids is not implemented; the whole screen is filled instead.
pub fn render_asteroids(fb: &mut FrameBuffer, vp: Viewport) {
    fill_rect(
        fb,
        vp.x,
        vp.y,
        vp.end_x(),
        vp.end_y(),
        CellStyle::default().into_cell('*'),
    );
}
