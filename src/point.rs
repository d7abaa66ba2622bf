use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A position on the integer sampling grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// True if both coordinates lie in `[0, bound]`.
    pub fn within(&self, bound: u32) -> bool {
        self.x <= bound && self.y <= bound
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// A point tagged with its 1-based position in the emitted sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: usize,
    #[serde(flatten)]
    pub point: Point,
}
