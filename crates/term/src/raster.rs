//! Rasterizer: stateless drawing primitives on absolute screen coordinates.
//!
//! None of these validate bounds. Staying on screen is the caller's job; cells
//! that land outside the framebuffer are dropped by the surface itself.
//!
//! Three line algorithms are provided and they do not agree on which cells a
//! line covers:
//!
//! - [`plot_line_parametric`] samples a fixed 50 points along the segment, so it
//!   oversamples short lines and leaves gaps in long ones.
//! - [`plot_line_dda`] always walks `|dx|` columns and accumulates the slope in
//!   floating point; steep lines come out sparse.
//! - [`plot_line_bresenham`] is the integer error-term algorithm and covers every
//!   octant with one cell per major-axis step, both endpoints included.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::glyphs::Glyph;
use crate::types::Coords;

/// Samples taken by the parametric line (t advances by 0.02).
pub const PARAMETRIC_STEPS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAlgorithm {
    Parametric,
    Dda,
    Bresenham,
}

/// Fill rows `[origin_y, end_row)` and columns `[origin_x, end_col)` with `cell`.
///
/// `end_col`/`end_row` are absolute end coordinates, not a width and height:
/// callers pass `origin + size`.
pub fn fill_rect(
    fb: &mut FrameBuffer,
    origin_x: i32,
    origin_y: i32,
    end_col: i32,
    end_row: i32,
    cell: Cell,
) {
    for row in origin_y..end_row {
        for col in origin_x..end_col {
            fb.set_at(col, row, cell);
        }
    }
}

/// Copy a 5x3 tile with its top-left corner at `(x, y)`. Spaces are transparent.
pub fn blit_tile(fb: &mut FrameBuffer, x: i32, y: i32, tile: &Glyph, style: CellStyle) {
    for (row, line) in tile.iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            if ch != b' ' {
                fb.put_char_at(x + col as i32, y + row as i32, ch as char, style);
            }
        }
    }
}

/// Box-drawing frame with corners at `(left, top)` and `(right, bottom)`, inclusive.
pub fn draw_frame(
    fb: &mut FrameBuffer,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    style: CellStyle,
) {
    if right <= left || bottom <= top {
        return;
    }

    for col in left + 1..right {
        fb.put_char_at(col, top, '─', style);
        fb.put_char_at(col, bottom, '─', style);
    }
    for row in top + 1..bottom {
        fb.put_char_at(left, row, '│', style);
        fb.put_char_at(right, row, '│', style);
    }
    fb.put_char_at(left, top, '┌', style);
    fb.put_char_at(right, top, '┐', style);
    fb.put_char_at(left, bottom, '└', style);
    fb.put_char_at(right, bottom, '┘', style);
}

pub fn draw_line(fb: &mut FrameBuffer, a: Coords, b: Coords, algo: LineAlgorithm, cell: Cell) {
    let plot = |p: Coords| fb.set_at(p.x, p.y, cell);
    match algo {
        LineAlgorithm::Parametric => plot_line_parametric(a, b, plot),
        LineAlgorithm::Dda => plot_line_dda(a, b, plot),
        LineAlgorithm::Bresenham => plot_line_bresenham(a, b, plot),
    }
}

/// Interpolate `a + (b - a) * t` for `t` in `[0, 1)`, truncating to cells.
///
/// The end point itself is never reached. Consecutive samples may hit the same
/// cell, so `plot` can see duplicates.
pub fn plot_line_parametric(a: Coords, b: Coords, mut plot: impl FnMut(Coords)) {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;

    for i in 0..PARAMETRIC_STEPS {
        let t = i as f32 / PARAMETRIC_STEPS as f32;
        let x = (a.x as f32 + dx * t) as i32;
        let y = (a.y as f32 + dy * t) as i32;
        plot(Coords::new(x, y));
    }
}

/// Walk `|dx|` columns from `a` toward `b`, stepping y by the absolute slope.
///
/// The y direction is fixed by the endpoints up front. The end point is not
/// plotted. A zero-width line (`dx == 0`) is drawn as a vertical run instead of
/// dividing by zero.
pub fn plot_line_dda(a: Coords, b: Coords, mut plot: impl FnMut(Coords)) {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();

    if dx == 0 {
        let step = if a.y > b.y { -1 } else { 1 };
        let mut y = a.y;
        for _ in 0..dy {
            plot(Coords::new(a.x, y));
            y += step;
        }
        return;
    }

    let slope = dy as f32 / dx as f32;
    let descending = a.y > b.y;
    let mut x = a.x;
    let mut y = a.y as f32;

    for _ in 0..dx {
        plot(Coords::new(x, y as i32));

        if x > b.x {
            x -= 1;
        } else {
            x += 1;
        }

        if descending {
            y -= slope;
        } else {
            y += slope;
        }
    }
}

/// Integer error-term line from `a` to `b`, both endpoints included.
pub fn plot_line_bresenham(a: Coords, b: Coords, mut plot: impl FnMut(Coords)) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);

    loop {
        plot(Coords::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Plotter = fn(Coords, Coords, &mut dyn FnMut(Coords));

    fn collect(f: Plotter, a: Coords, b: Coords) -> Vec<Coords> {
        let mut out = Vec::new();
        f(a, b, &mut |p| out.push(p));
        out
    }

    fn bresenham(a: Coords, b: Coords, plot: &mut dyn FnMut(Coords)) {
        plot_line_bresenham(a, b, plot)
    }

    fn dda(a: Coords, b: Coords, plot: &mut dyn FnMut(Coords)) {
        plot_line_dda(a, b, plot)
    }

    #[test]
    fn bresenham_diagonal_hits_every_step() {
        let pts = collect(bresenham, Coords::new(0, 0), Coords::new(4, 4));
        let expected: Vec<Coords> = (0..=4).map(|i| Coords::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn bresenham_steep_line_is_connected() {
        let pts = collect(bresenham, Coords::new(3, 10), Coords::new(0, 0));
        assert_eq!(pts.first(), Some(&Coords::new(3, 10)));
        assert_eq!(pts.last(), Some(&Coords::new(0, 0)));
        assert_eq!(pts.len(), 11);
        for w in pts.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 1);
            assert!((w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn bresenham_single_point() {
        let pts = collect(bresenham, Coords::new(2, 2), Coords::new(2, 2));
        assert_eq!(pts, vec![Coords::new(2, 2)]);
    }

    #[test]
    fn dda_vertical_line_is_a_run() {
        let pts = collect(dda, Coords::new(5, 8), Coords::new(5, 3));
        let ys: Vec<i32> = pts.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![8, 7, 6, 5, 4]);
        assert!(pts.iter().all(|p| p.x == 5));
    }

    #[test]
    fn dda_descending_direction_fixed_by_endpoints() {
        let pts = collect(dda, Coords::new(0, 4), Coords::new(4, 0));
        let ys: Vec<i32> = pts.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![4, 3, 2, 1]);
    }

    #[test]
    fn parametric_always_takes_fifty_samples() {
        let mut n = 0;
        plot_line_parametric(Coords::new(0, 0), Coords::new(1000, 3), |_| n += 1);
        assert_eq!(n, PARAMETRIC_STEPS);
    }

    #[test]
    fn frame_corners() {
        let mut fb = FrameBuffer::new(5, 4);
        draw_frame(&mut fb, 0, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(4, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 3).unwrap().ch, '└');
        assert_eq!(fb.get(4, 3).unwrap().ch, '┘');
        assert_eq!(fb.get(2, 0).unwrap().ch, '─');
        assert_eq!(fb.get(0, 1).unwrap().ch, '│');
    }
}
