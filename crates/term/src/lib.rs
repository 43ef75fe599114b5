//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Every mode
//! draws into a [`FrameBuffer`] with the [`raster`] primitives; the
//! [`TerminalRenderer`] then flushes the buffer to the real terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be asserted cell by cell
//! - Flush only the cells that changed since the previous frame

pub mod debug_view;
pub mod fb;
pub mod glyphs;
pub mod raster;
pub mod renderer;
pub mod screens;
pub mod snake_view;
pub mod testbed_view;

pub use tty_arcade_core as core;
pub use tty_arcade_types as types;

pub use debug_view::render_debug_overlay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use glyphs::{draw_number, Glyph, DIGITS};
pub use raster::{
    blit_tile, draw_frame, draw_line, fill_rect, plot_line_bresenham, plot_line_dda,
    plot_line_parametric, LineAlgorithm,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_asteroids, render_menu};
pub use snake_view::SnakeView;
pub use testbed_view::render_testbed;
