//! Free-camera test bed: a movable box used to exercise the rasterizer.

use crate::types::{Coords, KeyFlags, Viewport};

/// Side length of the movable box.
pub const TESTBED_BOX: i32 = 10;

/// Offset of the fixed line anchor from the viewport origin.
pub const TESTBED_ANCHOR: Coords = Coords::new(25, 30);

/// Movable box. `end_x`/`end_y` are absolute end coordinates (one past the
/// last column/row), the form `fill_rect` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestBedState {
    pub x: i32,
    pub y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl TestBedState {
    pub fn new(vp: Viewport) -> Self {
        let x = vp.x + 5;
        let y = vp.y + 15;
        Self {
            x,
            y,
            end_x: x + TESTBED_BOX,
            end_y: y + TESTBED_BOX,
        }
    }

    pub fn position(&self) -> Coords {
        Coords::new(self.x, self.y)
    }

    /// Move one cell per held arrow and keep the box on screen.
    ///
    /// Row 0 is left free for the coordinate readout.
    pub fn update(&mut self, input: &KeyFlags, vp: Viewport) {
        if input.left() {
            self.x -= 1;
        }
        if input.right() {
            self.x += 1;
        }
        if input.up() {
            self.y -= 1;
        }
        if input.down() {
            self.y += 1;
        }

        if self.x < vp.x {
            self.x = vp.x;
        }
        if self.y < vp.y + 1 {
            self.y = vp.y + 1;
        }
        if self.x + TESTBED_BOX > vp.end_x() {
            self.x = (vp.end_x() - TESTBED_BOX).max(vp.x);
        }
        if self.y + TESTBED_BOX > vp.end_y() {
            self.y = (vp.end_y() - TESTBED_BOX).max(vp.y + 1);
        }

        self.end_x = self.x + TESTBED_BOX;
        self.end_y = self.y + TESTBED_BOX;
    }

    /// Where the demo lines start.
    pub fn center(vp: Viewport) -> Coords {
        Coords::new(vp.x + vp.width as i32 / 2, vp.y + vp.height as i32 / 2)
    }

    pub fn anchor(vp: Viewport) -> Coords {
        Coords::new(vp.x + TESTBED_ANCHOR.x, vp.y + TESTBED_ANCHOR.y)
    }
}
