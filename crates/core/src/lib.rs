//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the per-mode simulation state and the frame pacer.
//! It has **no dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Fast**: A snake step is O(1) in the body length apart from the collision scan
//!
//! # Module Structure
//!
//! - [`snake`]: Snake state machine (timed steps, growth, wrap-around, self-collision)
//! - [`tail`]: Ring buffer holding the snake's tail history
//! - [`testbed`]: Movable box for the rasterizer test bed
//! - [`pacer`]: Fixed-budget frame pacer with a pluggable [`Clock`]
//! - [`rng`]: Small LCG for apple placement
//!
//! # Example
//!
//! ```
//! use tty_arcade_core::{SnakeState, StepOutcome};
//! use tty_arcade_types::{KeyFlags, Viewport};
//!
//! let mut snake = SnakeState::new(Viewport::new(80, 40), 12345).unwrap();
//! snake.frame_timer = 0.0;
//!
//! // The timer expires on this frame, so the snake takes one step.
//! let outcome = snake.update(&KeyFlags::default(), 16.6);
//! assert_eq!(outcome, StepOutcome::Moved);
//! ```

pub mod pacer;
pub mod rng;
pub mod snake;
pub mod tail;
pub mod testbed;

pub use tty_arcade_types as types;

// Re-export commonly used types for convenience
pub use pacer::{Clock, FramePacer, FrameStats, SystemClock};
pub use rng::SimpleRng;
pub use snake::{Playfield, SnakeState, StepOutcome};
pub use tail::TailBuffer;
pub use testbed::TestBedState;
