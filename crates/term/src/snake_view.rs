//! SnakeView: maps `core::SnakeState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SnakeState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyphs::{draw_number, number_width};
use crate::raster::fill_rect;
use crate::types::{Viewport, TILE_ROWS};

const FIELD: CellStyle = CellStyle::fg(Rgb::new(70, 70, 80));
const WALL: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const APPLE: CellStyle = CellStyle::fg(Rgb::new(230, 200, 60));
const HEAD: CellStyle = CellStyle::fg(Rgb::new(120, 230, 120));
const BODY: CellStyle = CellStyle::fg(Rgb::new(80, 180, 80));
const INGESTED: CellStyle = CellStyle::fg(Rgb::new(230, 140, 60));
const TILES: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150));
const DEBUG: CellStyle = CellStyle::fg(Rgb::new(140, 140, 160));

/// Column offset of the score tiles from the viewport's left edge.
const SCORE_X: i32 = 4;

#[derive(Debug, Default)]
pub struct SnakeView;

impl SnakeView {
    /// Render the playfield, score/timer tiles, apple, snake and debug text.
    pub fn render_into(
        &self,
        snake: &SnakeState,
        elapsed_secs: u32,
        vp: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let pf = snake.playfield();

        // Field and walls.
        fill_rect(
            fb,
            vp.x,
            pf.wall_top,
            vp.end_x(),
            pf.wall_bottom,
            FIELD.into_cell(':'),
        );
        for row in pf.wall_top..pf.wall_bottom {
            fb.put_str_at(vp.x, row, "||", WALL);
            fb.put_str_at(vp.end_x() - 2, row, "||", WALL);
        }
        for col in vp.x..vp.end_x() {
            fb.put_char_at(col, pf.wall_top, '=', WALL);
            fb.put_char_at(col, pf.wall_bottom, '=', WALL);
        }

        self.draw_counters(fb, snake, elapsed_secs, vp);

        // Body, oldest first so newer segments win on overlap.
        for block in snake.history().iter().rev() {
            let (ch, style) = if block.ingested {
                ('0', INGESTED)
            } else {
                ('#', BODY)
            };
            fb.put_char_at(block.pos.x, block.pos.y, ch, style);
        }
        fb.put_char_at(snake.tail.x, snake.tail.y, '#', BODY);

        fb.put_char_at(snake.apple.x, snake.apple.y, '$', APPLE);
        fb.put_char_at(snake.player.x, snake.player.y, 'X', HEAD);

        self.draw_debug_text(fb, snake, vp);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snake: &SnakeState, elapsed_secs: u32, vp: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(vp.width, vp.height);
        self.render_into(snake, elapsed_secs, vp, &mut fb);
        fb
    }

    fn draw_counters(
        &self,
        fb: &mut FrameBuffer,
        snake: &SnakeState,
        elapsed_secs: u32,
        vp: Viewport,
    ) {
        let tiles_y = vp.end_y() - TILE_ROWS as i32 - 1;
        let label_y = tiles_y - 2;

        let score = snake.score() as u32;
        fb.put_str_at(vp.x + SCORE_X, label_y, "SCORE", LABEL);
        draw_number(fb, vp.x + SCORE_X, tiles_y, score, TILES);

        let timer_x = vp.end_x() - SCORE_X - number_width(elapsed_secs);
        fb.put_str_at(timer_x, label_y, "TIME", LABEL);
        draw_number(fb, timer_x, tiles_y, elapsed_secs, TILES);
    }

    fn draw_debug_text(&self, fb: &mut FrameBuffer, snake: &SnakeState, vp: Viewport) {
        let x = vp.x;
        let y = vp.y;
        fb.put_fmt_at(
            x,
            y + 3,
            format_args!(
                "head velocity: x = {:.6}, y = {:.6}",
                snake.velocity.x, snake.velocity.y
            ),
            DEBUG,
        );
        fb.put_fmt_at(
            x,
            y + 4,
            format_args!("head coords: x = {}, y = {}", snake.player.x, snake.player.y),
            DEBUG,
        );
        fb.put_fmt_at(
            x,
            y + 5,
            format_args!("tail coords: x = {}, y = {}", snake.tail.x, snake.tail.y),
            DEBUG,
        );
        fb.put_fmt_at(x, y + 6, format_args!("tail size: {}", snake.tail_size), DEBUG);
        fb.put_fmt_at(
            x,
            y + 7,
            format_args!("frame timer: {:.6}", snake.frame_timer),
            DEBUG,
        );
    }
}
