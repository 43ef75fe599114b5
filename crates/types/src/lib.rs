//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the host.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Screen Layout
//!
//! Every mode draws into the visible terminal area ([`Viewport`]). Snake carves a
//! playable rectangle out of it:
//!
//! - **Header band**: the top [`BORDER_BAND`] rows (debug text lives here)
//! - **Footer band**: the bottom [`BORDER_BAND`] rows (score/timer digit tiles)
//! - **Side inset**: [`SIDE_INSET`] columns on each side (the `||` walls)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Default frame rate |
//! | `INITIAL_FRAME_TIMER` | 60.0 | Frames before the first snake step |
//! | `INITIAL_SPEED_MULTIPLIER` | 0.5 | Step interval = `delta_ms * multiplier` |
//! | `SPEED_STEP` | 0.25 | Multiplier decrease per apple |
//!
//! # Examples
//!
//! ```
//! use tty_arcade_types::{Coords, Key, KeyFlags, Velocity};
//!
//! let head = Coords::new(10, 10);
//! assert_eq!(head.advanced(Velocity::UP), Coords::new(10, 9));
//!
//! let mut flags = KeyFlags::default();
//! flags.set(Key::Left);
//! assert!(flags.is_set(Key::Left));
//! flags.clear();
//! assert!(!flags.any());
//! ```

/// Default frame rate.
pub const TARGET_FPS: u32 = 60;

/// Frame budget at [`TARGET_FPS`], in milliseconds.
pub const TARGET_FRAME_MS: f64 = 1000.0 / TARGET_FPS as f64;

/// Rows reserved above and below the snake playfield.
pub const BORDER_BAND: i32 = 10;

/// Columns reserved on the left and right of the snake playfield.
pub const SIDE_INSET: i32 = 2;

/// Frames before the first snake step after start-up.
pub const INITIAL_FRAME_TIMER: f32 = 60.0;

/// Starting step-interval multiplier.
pub const INITIAL_SPEED_MULTIPLIER: f32 = 0.5;

/// Multiplier decrease per eaten apple (floored at zero).
pub const SPEED_STEP: f32 = 0.25;

/// Tail growth per eaten apple.
pub const GROWTH_PER_APPLE: usize = 5;

/// Distance between the starting head and the starting apple.
pub const APPLE_START_OFFSET: i32 = 5;

/// Rows per digit tile.
pub const TILE_ROWS: usize = 5;

/// Columns per digit tile.
pub const TILE_COLS: usize = 3;

/// Discrete cell position. `(0, 0)` is the top-left corner of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by moving one step along `vel`.
    pub fn advanced(self, vel: Velocity) -> Self {
        Self {
            x: self.x + vel.x as i32,
            y: self.y + vel.y as i32,
        }
    }

    /// The cell one step against `vel`.
    pub fn retreated(self, vel: Velocity) -> Self {
        Self {
            x: self.x - vel.x as i32,
            y: self.y - vel.y as i32,
        }
    }
}

/// Snake movement direction. Exactly one axis is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const UP: Velocity = Velocity { x: 0.0, y: -1.0 };
    pub const DOWN: Velocity = Velocity { x: 0.0, y: 1.0 };
    pub const LEFT: Velocity = Velocity { x: -1.0, y: 0.0 };
    pub const RIGHT: Velocity = Velocity { x: 1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One historical body-segment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TailBlock {
    pub pos: Coords,
    /// Segment is carrying a just-eaten apple through the body.
    pub ingested: bool,
}

impl TailBlock {
    pub const fn new(pos: Coords) -> Self {
        Self {
            pos,
            ingested: false,
        }
    }
}

/// The visible terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Cell count of the whole area.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Absolute column one past the right edge.
    pub fn end_x(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Absolute row one past the bottom edge.
    pub fn end_y(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Keys recognized by the input sampler.
///
/// The discriminant doubles as the index into [`KeyFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    DebugToggle,
    Quit,
    SelectTestBed,
    SelectSnake,
    SelectAsteroids,
    Escape,
    Resize,
}

/// Number of [`Key`] variants.
pub const KEY_COUNT: usize = 15;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::DebugToggle,
        Key::Quit,
        Key::SelectTestBed,
        Key::SelectSnake,
        Key::SelectAsteroids,
        Key::Escape,
        Key::Resize,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One-hot key flags for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyFlags([bool; KEY_COUNT]);

impl KeyFlags {
    pub fn set(&mut self, key: Key) {
        self.0[key.index()] = true;
    }

    pub fn is_set(&self, key: Key) -> bool {
        self.0[key.index()]
    }

    pub fn clear(&mut self) {
        self.0 = [false; KEY_COUNT];
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    /// Raw flags in [`Key::ALL`] order.
    pub fn as_array(&self) -> &[bool; KEY_COUNT] {
        &self.0
    }

    pub fn up(&self) -> bool {
        self.is_set(Key::Up) || self.is_set(Key::W)
    }

    pub fn down(&self) -> bool {
        self.is_set(Key::Down) || self.is_set(Key::S)
    }

    pub fn left(&self) -> bool {
        self.is_set(Key::Left) || self.is_set(Key::A)
    }

    pub fn right(&self) -> bool {
        self.is_set(Key::Right) || self.is_set(Key::D)
    }
}

/// Selectable host modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Menu,
    TestBed,
    Snake,
    Asteroids,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Menu => "menu",
            GameMode::TestBed => "testBed",
            GameMode::Snake => "snake",
            GameMode::Asteroids => "asteroids",
        }
    }
}
