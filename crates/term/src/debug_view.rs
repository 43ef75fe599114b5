//! Debug overlay: frame timing panel drawn over whatever the mode rendered.

use std::fmt::{self, Write as _};

use arrayvec::{ArrayString, ArrayVec};

use crate::core::FrameStats;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::{draw_frame, fill_rect};
use crate::types::{KeyFlags, Viewport};

pub const DEBUG_LINES: usize = 5;

const PANEL: CellStyle = CellStyle::fg(Rgb::new(178, 0, 0));

type Line = ArrayString<64>;

fn line(args: fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = line.write_fmt(args);
    line
}

/// Text lines shown in the panel, top to bottom.
pub fn debug_lines(stats: &FrameStats, vp: Viewport) -> ArrayVec<Line, DEBUG_LINES> {
    ArrayVec::from([
        line(format_args!(
            "Time passed since start of program: {}s",
            stats.elapsed_secs
        )),
        line(format_args!(
            "This screen has {} rows and {} columns",
            vp.height, vp.width
        )),
        line(format_args!("Frame Time: {:.3} ms", stats.delta_ms)),
        line(format_args!(
            "Frame Cycles: {},({})Mhz",
            stats.delta_cycles,
            stats.mega_cycles()
        )),
        line(format_args!("FPS: {:.2}", stats.fps())),
    ])
}

/// Draw the panel with its bottom-left corner at `(x, bottom)`.
///
/// The key-flag row sits between the top border and the first text line.
pub fn render_debug_overlay(
    fb: &mut FrameBuffer,
    x: i32,
    bottom: i32,
    stats: &FrameStats,
    flags: &KeyFlags,
    vp: Viewport,
) {
    let lines = debug_lines(stats, vp);
    let longest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32;

    let border_width = longest + 1;
    let border_height = DEBUG_LINES as i32 + 2;
    let top = bottom - border_height;

    fill_rect(fb, x, top, x + border_width, bottom, PANEL.into_cell(' '));

    for (i, line) in lines.iter().enumerate() {
        let row = bottom - DEBUG_LINES as i32 + i as i32;
        fb.put_str_at(x + 1, row, line, PANEL);
    }

    for (i, &set) in flags.as_array().iter().enumerate() {
        fb.put_char_at(x + 1 + i as i32, top + 1, if set { '1' } else { '0' }, PANEL);
    }

    draw_frame(fb, x, top, x + border_width, bottom, PANEL);
}
