use std::fmt;

use arrayvec::ArrayVec;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance: `|x1 - x2| + |y1 - y2|`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the cell reached by applying `step` to this position.
    #[inline]
    pub fn offset(self, step: Displacement) -> Position {
        Position::new(self.x + step.dx, self.y + step.dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Single-step movement vector emitted once per turn.
///
/// Moves produced by the agent are cardinal: each component lies in
/// `{-1, 0, 1}` and at most one of them is non-zero. [`Displacement::ZERO`]
/// means "stay".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };
    pub const EAST: Self = Self { dx: 1, dy: 0 };
    pub const NORTH: Self = Self { dx: 0, dy: 1 };
    pub const WEST: Self = Self { dx: -1, dy: 0 };
    pub const SOUTH: Self = Self { dx: 0, dy: -1 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.dx != 0
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// True when the vector is a legal single move (cardinal or zero).
    pub fn is_cardinal_step(self) -> bool {
        self.dx.abs() <= 1 && self.dy.abs() <= 1 && (self.dx == 0 || self.dy == 0)
    }

    /// The two side-steps orthogonal to this move, in preference order.
    ///
    /// A horizontal move yields `[NORTH, SOUTH]`, a vertical one
    /// `[EAST, WEST]`. The zero vector has no perpendiculars.
    pub fn perpendiculars(self) -> ArrayVec<Displacement, 2> {
        let mut out = ArrayVec::new();
        if self.is_horizontal() {
            out.push(Self::NORTH);
            out.push(Self::SOUTH);
        } else if self.dy != 0 {
            out.push(Self::EAST);
            out.push(Self::WEST);
        }
        out
    }
}

impl From<(i32, i32)> for Displacement {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

impl From<Displacement> for (i32, i32) {
    fn from(step: Displacement) -> Self {
        (step.dx, step.dy)
    }
}

/// Unit step from `from` toward `to`.
///
/// Each axis delta is clamped to `[-1, 1]`; when the x component is non-zero
/// the y component is dropped so the result is always cardinal. Returns
/// [`Displacement::ZERO`] when the positions coincide.
pub fn direction_to(from: Position, to: Position) -> Displacement {
    let dx = (to.x - from.x).clamp(-1, 1);
    let dy = if dx != 0 {
        0
    } else {
        (to.y - from.y).clamp(-1, 1)
    };
    Displacement { dx, dy }
}
