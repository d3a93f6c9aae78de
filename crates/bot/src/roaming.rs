//! Roaming Fallback: deterministic scan over the cardinal directions.

use board::{Board, Displacement, Position};

/// Rotating direction cursor used when no objective yields a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roamer {
    index: usize,
}

impl Roamer {
    pub const CYCLE: [Displacement; 4] = [
        Displacement::EAST,
        Displacement::NORTH,
        Displacement::WEST,
        Displacement::SOUTH,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the next scan starts from.
    pub fn next_direction(&self) -> Displacement {
        Self::CYCLE[self.index]
    }

    /// Returns the first in-bounds step starting at the cursor and moves the
    /// cursor past it. On a board with no in-bounds neighbour the cursor stays
    /// put and the step is zero.
    pub fn step(&mut self, position: Position, board: &Board) -> Displacement {
        let len = Self::CYCLE.len();
        for offset in 0..len {
            let index = (self.index + offset) % len;
            let step = Self::CYCLE[index];
            if board.contains(position.offset(step)) {
                self.index = (index + 1) % len;
                return step;
            }
        }
        Displacement::ZERO
    }
}
