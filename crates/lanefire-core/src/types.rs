//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (points, origin bottom-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Width and height of a sprite's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

/// Axis-aligned bounding box, centered on a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Uniformly scaled copy.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            w: self.w * factor,
            h: self.h * factor,
        }
    }
}

impl From<(f64, f64)> for Size {
    fn from((w, h): (f64, f64)) -> Self {
        Self { w, h }
    }
}

impl Aabb {
    /// Box of `size` centered on `center`.
    pub fn centered(center: Position, size: Size) -> Self {
        let hw = size.w / 2.0;
        let hh = size.h / 2.0;
        Self {
            min_x: center.x - hw,
            min_y: center.y - hh,
            max_x: center.x + hw,
            max_y: center.y + hh,
        }
    }

    /// Overlap test. Touching edges do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
