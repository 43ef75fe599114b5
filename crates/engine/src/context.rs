//! Simulation context shared by every mode for the duration of a frame.

use crate::types::{GameMode, KeyFlags, Viewport};

#[derive(Debug, Clone)]
pub struct SimContext {
    pub viewport: Viewport,
    /// Mode dispatched on the next frame.
    pub mode: GameMode,
    pub show_debug: bool,
    /// Cleared by the quit key; the loop exits after the current frame.
    pub running: bool,
    /// This frame's key flags.
    pub input: KeyFlags,
    /// Duration of the previous frame.
    pub delta_ms: f64,
    pub elapsed_secs: u32,
}

impl SimContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            mode: GameMode::Menu,
            show_debug: false,
            running: true,
            input: KeyFlags::default(),
            delta_ms: 0.0,
            elapsed_secs: 0,
        }
    }
}
