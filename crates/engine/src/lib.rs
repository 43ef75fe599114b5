//! Engine module - per-frame orchestration.
//!
//! Ties the simulation state in `core`, the views in `term` and the sampled
//! input together. There is no global state: everything a mode may read or
//! change lives in a [`SimContext`] owned by the [`Host`].
//!
//! # Example
//!
//! ```
//! use tty_arcade_engine::Host;
//! use tty_arcade_term::FrameBuffer;
//! use tty_arcade_types::{GameMode, Key, KeyFlags, Viewport};
//!
//! let mut host = Host::new(Viewport::new(80, 40), 1, false).unwrap();
//! let mut fb = FrameBuffer::new(80, 40);
//!
//! let mut input = KeyFlags::default();
//! input.set(Key::SelectSnake);
//!
//! // Mode selection takes effect on the next frame.
//! assert_eq!(host.run_frame(&input, None, &mut fb).unwrap(), GameMode::Menu);
//! assert_eq!(host.run_frame(&KeyFlags::default(), None, &mut fb).unwrap(), GameMode::Snake);
//! ```

pub mod context;
pub mod host;

pub use tty_arcade_core as core;
pub use tty_arcade_input as input;
pub use tty_arcade_term as term;
pub use tty_arcade_types as types;

pub use context::SimContext;
pub use host::Host;
