//! Host: mode dispatcher owning every mode's persistent state.
//!
//! A frame goes through [`Host::run_frame`]:
//!
//! 1. Remember the mode selected by earlier frames.
//! 2. Apply input side effects (debug toggle, quit, resize, mode keys).
//!    A resize reallocates the snake tail buffer before anything is drawn.
//! 3. Clear the framebuffer and run the remembered mode's update + render.
//!
//! Mode keys and Snake's self-collision only change [`SimContext::mode`], so
//! they take effect on the following frame.

use std::collections::TryReserveError;

use log::info;

use crate::context::SimContext;
use crate::core::{FrameStats, SnakeState, StepOutcome, TestBedState};
use crate::input::InputSampler;
use crate::term::{render_asteroids, render_debug_overlay, render_menu, render_testbed};
use crate::term::{Cell, FrameBuffer, SnakeView};
use crate::types::{GameMode, Key, KeyFlags, Viewport};

pub struct Host {
    ctx: SimContext,
    snake: SnakeState,
    testbed: TestBedState,
    snake_view: SnakeView,
}

impl Host {
    /// Fails only if the snake tail buffer cannot be allocated.
    pub fn new(viewport: Viewport, seed: u32, show_debug: bool) -> Result<Self, TryReserveError> {
        let mut ctx = SimContext::new(viewport);
        ctx.show_debug = show_debug;
        Ok(Self {
            ctx,
            snake: SnakeState::new(viewport, seed)?,
            testbed: TestBedState::new(viewport),
            snake_view: SnakeView,
        })
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut SnakeState {
        &mut self.snake
    }

    pub fn testbed(&self) -> &TestBedState {
        &self.testbed
    }

    pub fn is_running(&self) -> bool {
        self.ctx.running
    }

    /// Run one frame from the sampler's current flags.
    pub fn run_sampled(
        &mut self,
        sampler: &InputSampler,
        fb: &mut FrameBuffer,
    ) -> Result<GameMode, TryReserveError> {
        self.run_frame(sampler.flags(), sampler.resized_to(), fb)
    }

    /// Run one frame. Returns the mode that was dispatched.
    pub fn run_frame(
        &mut self,
        input: &KeyFlags,
        resized_to: Option<(u16, u16)>,
        fb: &mut FrameBuffer,
    ) -> Result<GameMode, TryReserveError> {
        let active = self.ctx.mode;
        self.apply_input(input, resized_to)?;

        let vp = self.ctx.viewport;
        fb.resize(vp.width, vp.height);
        fb.clear(Cell::default());

        match active {
            GameMode::Menu => render_menu(fb, vp),
            GameMode::TestBed => {
                self.testbed.update(&self.ctx.input, vp);
                render_testbed(fb, &self.testbed, vp);
            }
            GameMode::Snake => {
                let outcome = self.snake.update(&self.ctx.input, self.ctx.delta_ms);
                if outcome == StepOutcome::Collided {
                    self.select(GameMode::Menu);
                }
                self.snake_view
                    .render_into(&self.snake, self.ctx.elapsed_secs, vp, fb);
            }
            GameMode::Asteroids => render_asteroids(fb, vp),
        }

        Ok(active)
    }

    /// Apply the side effects of this frame's keys.
    pub fn apply_input(
        &mut self,
        input: &KeyFlags,
        resized_to: Option<(u16, u16)>,
    ) -> Result<(), TryReserveError> {
        self.ctx.input = *input;

        if input.is_set(Key::DebugToggle) {
            self.ctx.show_debug = !self.ctx.show_debug;
        }
        if input.is_set(Key::Quit) {
            info!("quit requested");
            self.ctx.running = false;
        }
        if let Some((w, h)) = resized_to {
            self.resize(Viewport::new(w, h))?;
        }

        if input.is_set(Key::SelectTestBed) {
            self.select(GameMode::TestBed);
        }
        if input.is_set(Key::SelectSnake) {
            self.select(GameMode::Snake);
        }
        if input.is_set(Key::SelectAsteroids) {
            self.select(GameMode::Asteroids);
        }
        if input.is_set(Key::Escape) {
            self.select(GameMode::Menu);
        }
        Ok(())
    }

    /// Adopt a new terminal size. The tail history is discarded.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), TryReserveError> {
        self.ctx.viewport = viewport;
        self.snake.resize(viewport)
    }

    /// Record the pacer's measurements for the next frame.
    pub fn finish_frame(&mut self, stats: &FrameStats) {
        self.ctx.delta_ms = stats.delta_ms;
        self.ctx.elapsed_secs = stats.elapsed_secs;
    }

    /// Draw the debug overlay if it is enabled.
    pub fn render_overlay(&self, stats: &FrameStats, fb: &mut FrameBuffer) {
        if !self.ctx.show_debug {
            return;
        }
        let vp = self.ctx.viewport;
        render_debug_overlay(fb, vp.x, vp.end_y() - 2, stats, &self.ctx.input, vp);
    }

    fn select(&mut self, mode: GameMode) {
        if self.ctx.mode != mode {
            info!("mode {} -> {}", self.ctx.mode.as_str(), mode.as_str());
            self.ctx.mode = mode;
        }
    }
}
