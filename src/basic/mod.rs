pub use dir::Dir;
pub use vector::{BoardDim, Vector};

mod dir;
mod vector;

/// A relative turn request as produced by the input latch.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Clockwise quarter turns: `Right` advances one step around the
    /// direction wheel, `Left` goes back one.
    pub fn delta(self) -> u8 {
        match self {
            Turn::Right => 1,
            Turn::Left => 3,
        }
    }
}
