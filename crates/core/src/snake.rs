//! Snake simulation - timed stepping, growth, wrap-around and self-collision.
//!
//! The simulation runs at a lower rate than rendering. Every frame
//! [`SnakeState::update`] decrements the frame timer by one; when it drops
//! below zero a single discrete step runs and the timer is re-armed with
//! `delta_ms * speed_multiplier`. The multiplier shrinks with every apple, so
//! the snake speeds up as it grows until it steps once per frame.
//!
//! The body is the neck ([`SnakeState::tail`]) followed by the tail history
//! (see [`TailBuffer`]), at most `tail_size` blocks long.

use std::collections::TryReserveError;

use log::{debug, info};

use crate::rng::SimpleRng;
use crate::tail::TailBuffer;
use crate::types::{
    Coords, KeyFlags, TailBlock, Velocity, Viewport, APPLE_START_OFFSET, BORDER_BAND,
    GROWTH_PER_APPLE, INITIAL_FRAME_TIMER, INITIAL_SPEED_MULTIPLIER, SIDE_INSET, SPEED_STEP,
};

/// The region of the viewport the head and apple may occupy.
///
/// Bounds are inclusive. `wall_top`/`wall_bottom` are the rows of the `=`
/// border lines just outside the playable rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub wall_top: i32,
    pub wall_bottom: i32,
}

impl Playfield {
    pub fn for_viewport(vp: Viewport) -> Self {
        let wall_top = vp.y + BORDER_BAND;
        let wall_bottom = vp.end_y() - BORDER_BAND;
        Self {
            left: vp.x + SIDE_INSET,
            right: vp.end_x() - SIDE_INSET - 1,
            top: wall_top + 1,
            bottom: wall_bottom - 1,
            wall_top,
            wall_bottom,
        }
    }

    /// True when the viewport is too small to hold a single playable cell.
    pub fn is_degenerate(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    pub fn contains(&self, c: Coords) -> bool {
        (self.left..=self.right).contains(&c.x) && (self.top..=self.bottom).contains(&c.y)
    }

    pub fn cell_count(&self) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        ((self.right - self.left + 1) as usize) * ((self.bottom - self.top + 1) as usize)
    }

    pub fn center(&self) -> Coords {
        Coords::new((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Wrap-around boundary policy: leaving one edge re-enters at the opposite one.
    pub fn wrap(&self, c: Coords) -> Coords {
        let mut out = c;
        if out.x > self.right {
            out.x = self.left;
        }
        if out.x < self.left {
            out.x = self.right;
        }
        if out.y > self.bottom {
            out.y = self.top;
        }
        if out.y < self.top {
            out.y = self.bottom;
        }
        out
    }
}

/// What a call to [`SnakeState::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Frame timer still running; no step this frame.
    Waiting,
    /// Head advanced one cell.
    Moved,
    /// Head advanced onto the apple.
    Ate,
    /// Head ran into the body; the snake was reset.
    Collided,
}

#[derive(Debug, Clone)]
pub struct SnakeState {
    pub player: Coords,
    /// First body segment (the neck).
    pub tail: Coords,
    pub apple: Coords,
    pub tail_size: usize,
    pub velocity: Velocity,
    pub frame_timer: f32,
    pub speed_multiplier: f32,
    history: TailBuffer,
    /// Where the last apple was eaten, until the body passes over it.
    last_eaten: Option<Coords>,
    playfield: Playfield,
    rng: SimpleRng,
}

impl SnakeState {
    /// Centered head, neck one cell above, apple further above.
    ///
    /// On short terminals the apple (or neck) may start outside the playable
    /// rows; it is pulled back in the same way a resize does.
    pub fn new(vp: Viewport, seed: u32) -> Result<Self, TryReserveError> {
        let player = Coords::new(vp.x + vp.width as i32 / 2, vp.y + vp.height as i32 / 2);
        let mut state = Self {
            player,
            tail: Coords::new(player.x, player.y - 1),
            apple: Coords::new(player.x, player.y - APPLE_START_OFFSET),
            tail_size: 1,
            velocity: Velocity::DOWN,
            frame_timer: INITIAL_FRAME_TIMER,
            speed_multiplier: INITIAL_SPEED_MULTIPLIER,
            history: TailBuffer::with_capacity(vp.area())?,
            last_eaten: None,
            playfield: Playfield::for_viewport(vp),
            rng: SimpleRng::new(seed),
        };
        state.reflow();
        Ok(state)
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn history(&self) -> &TailBuffer {
        &self.history
    }

    /// Apples eaten so far.
    pub fn score(&self) -> usize {
        (self.tail_size - 1) / GROWTH_PER_APPLE
    }

    /// Largest `tail_size` the buffer and playfield can hold.
    pub fn growth_limit(&self) -> usize {
        self.playfield
            .cell_count()
            .min(self.history.capacity().saturating_sub(1))
    }

    /// Reallocate the tail buffer for a new terminal size.
    ///
    /// History is discarded. Head, neck and apple are pulled back into the new
    /// playable rectangle so nothing is ever drawn outside it.
    pub fn resize(&mut self, vp: Viewport) -> Result<(), TryReserveError> {
        self.history.reallocate(vp.area())?;
        self.playfield = Playfield::for_viewport(vp);
        self.last_eaten = None;
        debug!(
            "snake tail buffer reallocated: {}x{} -> capacity {}",
            vp.width,
            vp.height,
            self.history.capacity()
        );

        self.reflow();
        Ok(())
    }

    /// Bring head, neck and apple inside the playfield.
    ///
    /// `tail_size` is left alone: the history never holds more than the
    /// buffer capacity, and `growth_limit` stops further growth.
    fn reflow(&mut self) {
        if self.playfield.is_degenerate() {
            return;
        }
        self.player = self.playfield.wrap(self.player);
        if !self.playfield.contains(self.tail) {
            self.tail = self.playfield.wrap(self.player.retreated(self.velocity));
        }
        if !self.playfield.contains(self.apple) {
            self.apple = self.random_cell();
        }
    }

    /// Apply direction input, then advance the frame timer and step if it expired.
    pub fn update(&mut self, input: &KeyFlags, delta_ms: f64) -> StepOutcome {
        self.steer(input);

        self.frame_timer -= 1.0;
        if self.frame_timer >= 0.0 {
            return StepOutcome::Waiting;
        }

        let outcome = self.step();
        self.frame_timer = delta_ms as f32 * self.speed_multiplier;
        outcome
    }

    /// Pick a new direction. Only one direction is honored per frame and a
    /// direction that would put the head on the neck is rejected.
    pub fn steer(&mut self, input: &KeyFlags) {
        let wanted = if input.up() {
            Velocity::UP
        } else if input.down() {
            Velocity::DOWN
        } else if input.left() {
            Velocity::LEFT
        } else if input.right() {
            Velocity::RIGHT
        } else {
            return;
        };

        if self.playfield.wrap(self.player.advanced(wanted)) != self.tail {
            self.velocity = wanted;
        }
    }

    /// One discrete simulation step.
    pub fn step(&mut self) -> StepOutcome {
        if self.playfield.is_degenerate() {
            return StepOutcome::Waiting;
        }

        let old_head = self.player;

        let mut vacated = TailBlock::new(self.tail);
        if self.last_eaten == Some(self.tail) {
            vacated.ingested = true;
            self.last_eaten = None;
        }
        self.history.push_front(vacated, self.tail_size);
        self.tail = self.player;
        self.player = self.playfield.wrap(self.player.advanced(self.velocity));

        let mut outcome = StepOutcome::Moved;
        if self.player != old_head && self.player == self.apple {
            self.eat();
            outcome = StepOutcome::Ate;
        }

        if self.history.contains(self.player) {
            self.reset_after_collision();
            outcome = StepOutcome::Collided;
        }
        outcome
    }

    fn eat(&mut self) {
        self.last_eaten = Some(self.apple);
        self.apple = self.random_cell();

        if self.tail_size + GROWTH_PER_APPLE <= self.growth_limit() {
            self.tail_size += GROWTH_PER_APPLE;
            debug_assert!(self.tail_size < self.history.capacity());
        }
        self.speed_multiplier = (self.speed_multiplier - SPEED_STEP).max(0.0);
    }

    fn reset_after_collision(&mut self) {
        info!("snake self-collision at size {}", self.tail_size);
        self.tail_size = 1;
        self.history.clear();
        self.last_eaten = None;
        self.player = self.playfield.center();
        self.tail = self.playfield.wrap(self.player.retreated(self.velocity));
    }

    fn random_cell(&mut self) -> Coords {
        let pf = self.playfield;
        let x = self.rng.range_inclusive(pf.left, pf.right);
        let y = self.rng.range_inclusive(pf.top, pf.bottom);
        Coords::new(x, y)
    }
}
