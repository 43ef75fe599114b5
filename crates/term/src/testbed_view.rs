//! Test bed view: checkerboard backdrop, the three line algorithms side by
//! side, and the movable box.

use crate::core::TestBedState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::{draw_line, fill_rect, LineAlgorithm};
use crate::types::Viewport;

const BACKDROP: CellStyle = CellStyle::fg(Rgb::new(60, 60, 70));
const MARKER: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240));
const PARAMETRIC: CellStyle = CellStyle::fg(Rgb::new(120, 200, 240));
const DDA: CellStyle = CellStyle::fg(Rgb::new(240, 180, 90));
const BRESENHAM: CellStyle = CellStyle::fg(Rgb::new(200, 120, 220));
const BOX: CellStyle = CellStyle::fg(Rgb::new(120, 230, 120));
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));

pub fn render_testbed(fb: &mut FrameBuffer, tb: &TestBedState, vp: Viewport) {
    fill_rect(fb, vp.x, vp.y, vp.end_x(), vp.end_y(), BACKDROP.into_cell('▒'));

    let center = TestBedState::center(vp);
    let anchor = TestBedState::anchor(vp);
    let target = tb.position();

    draw_line(fb, center, target, LineAlgorithm::Parametric, PARAMETRIC.into_cell('x'));
    draw_line(fb, center, anchor, LineAlgorithm::Dda, DDA.into_cell('b'));
    draw_line(fb, anchor, target, LineAlgorithm::Dda, DDA.into_cell('c'));
    draw_line(fb, target, anchor, LineAlgorithm::Bresenham, BRESENHAM.into_cell('o'));

    fill_rect(fb, tb.x, tb.y, tb.end_x, tb.end_y, BOX.into_cell('≠'));

    fb.put_char_at(center.x, center.y, 'A', MARKER);
    fb.put_char_at(anchor.x, anchor.y, 'B', MARKER);

    fb.put_fmt_at(vp.x, vp.y, format_args!("x = {}, y = {}", tb.x, tb.y), TEXT);
    fb.put_fmt_at(vp.x, vp.y + 1, format_args!("player width {}", tb.end_x), TEXT);
}
