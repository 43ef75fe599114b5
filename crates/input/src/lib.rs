//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` events into [`crate::types::Key`] flags, one event per frame,
//! behind a [`KeySource`] seam so the sampler can be driven without a terminal.

pub mod map;
pub mod sampler;

pub use tty_arcade_types as types;

pub use map::map_key_event;
pub use sampler::{CrosstermSource, InputSampler, KeySource};
