//! Digit glyph atlas: 5x3 ASCII tiles for 0-9.

use crate::fb::{CellStyle, FrameBuffer};
use crate::raster::blit_tile;
use crate::types::{TILE_COLS, TILE_ROWS};

pub type Glyph = [[u8; TILE_COLS]; TILE_ROWS];

/// Horizontal advance between digits (tile width plus one blank column).
pub const DIGIT_ADVANCE: i32 = TILE_COLS as i32 + 1;

pub const DIGITS: [Glyph; 10] = [
    [*b"***", *b"* *", *b"* *", *b"* *", *b"***"],
    [*b" * ", *b" * ", *b" * ", *b" * ", *b" * "],
    [*b"***", *b"  *", *b"***", *b"*  ", *b"***"],
    [*b"***", *b"  *", *b"***", *b"  *", *b"***"],
    [*b"* *", *b"* *", *b"***", *b"  *", *b"  *"],
    [*b"***", *b"*  ", *b"***", *b"  *", *b"***"],
    [*b"***", *b"*  ", *b"***", *b"* *", *b"***"],
    [*b"***", *b"  *", *b" * ", *b" * ", *b" * "],
    [*b"***", *b"* *", *b"***", *b"* *", *b"***"],
    [*b"***", *b"* *", *b"***", *b"  *", *b"***"],
];

pub fn digit_glyph(digit: u32) -> Option<&'static Glyph> {
    DIGITS.get(digit as usize)
}

/// Width in columns of `value` drawn with [`draw_number`].
pub fn number_width(value: u32) -> i32 {
    let digits = value.checked_ilog10().unwrap_or(0) as i32 + 1;
    digits * DIGIT_ADVANCE - 1
}

/// Draw `value` as digit tiles starting at `(x, y)`.
pub fn draw_number(fb: &mut FrameBuffer, x: i32, y: i32, value: u32, style: CellStyle) {
    let digits = value.checked_ilog10().unwrap_or(0) + 1;
    let mut cx = x;
    for i in (0..digits).rev() {
        let d = (value / 10u32.pow(i)) % 10;
        if let Some(glyph) = digit_glyph(d) {
            blit_tile(fb, cx, y, glyph, style);
        }
        cx += DIGIT_ADVANCE;
    }
}
