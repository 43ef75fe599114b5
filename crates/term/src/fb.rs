//! Framebuffer and style types for terminal rendering.
//!
//! The framebuffer is the terminal surface every mode draws on. Coordinates
//! passed to the `*_at` helpers are absolute and signed; cells outside the
//! buffer are dropped, the way a curses screen ignores off-screen writes.

use std::fmt::{self, Write as _};

use arrayvec::ArrayString;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }

    /// Swap foreground and background.
    pub fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            ..self
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Full-screen clear.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write a cell at signed absolute coordinates.
    #[inline]
    pub fn set_at(&mut self, x: i32, y: i32, cell: Cell) {
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            self.set(x, y, cell);
        }
    }

    pub fn get_at(&self, x: i32, y: i32) -> Option<Cell> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y),
            _ => None,
        }
    }

    pub fn put_char_at(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set_at(x, y, Cell { ch, style });
    }

    pub fn put_str_at(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width as i32 {
                break;
            }
            self.put_char_at(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Formatted text without a heap allocation.
    ///
    /// Text is staged in a 128-byte buffer. A formatted piece that does not fit
    /// is dropped whole; everything written before it is still drawn.
    pub fn put_fmt_at(&mut self, x: i32, y: i32, args: fmt::Arguments<'_>, style: CellStyle) {
        let mut line = ArrayString::<128>::new();
        let _ = line.write_fmt(args);
        self.put_str_at(x, y, &line, style);
    }

    /// Row `y` as a string (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
