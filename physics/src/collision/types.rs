/*!
Core collision types shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data
exchanged between:
- obstacle geometry (extents, ground-position queries)
- the best-obstacle selector (movement modes, query rectangles)
- the obstacle map (layer filters)
*/

use nalgebra as na;

/// Integer vector in level pixel coordinates.
pub type Vec2 = na::Vector2<i32>;

/// Which cardinal direction currently acts as "down" for the querying actor.
///
/// Rotated-gravity platforming lets a character run along walls and
/// ceilings; the mode selects the axis and direction used for ground
/// comparisons. Callers pre-rotate query coordinates into the frame implied
/// by the mode before querying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementMode {
    Floor,
    LeftWall,
    Ceiling,
    RightWall,
}

impl MovementMode {
    /// The direction ground queries look in while moving in this mode.
    #[inline]
    pub fn ground_direction(self) -> GroundDirection {
        match self {
            MovementMode::Floor => GroundDirection::Down,
            MovementMode::LeftWall => GroundDirection::Left,
            MovementMode::Ceiling => GroundDirection::Up,
            MovementMode::RightWall => GroundDirection::Right,
        }
    }
}

/// Direction of a ground-position query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroundDirection {
    Up,
    Right,
    Down,
    Left,
}

/// Obstacle layer tag, also used as the per-query layer filter.
///
/// `Default` obstacles are visible to every query. A non-default filter
/// hides only obstacles on a *different* non-default layer, and filtering
/// with `Default` disables filtering entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    #[default]
    Default,
    A,
    B,
}

/// Axis-aligned query rectangle with inclusive corners `(x1, y1)`-`(x2, y2)`.
///
/// Invariant: `x1 <= x2 && y1 <= y2`. Callers own well-formed rectangles;
/// a violation is a precondition failure (asserted in debug builds), never a
/// signaled error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl QueryRect {
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        debug_assert!(
            x1 <= x2 && y1 <= y2,
            "malformed query rectangle ({x1}, {y1})-({x2}, {y2})"
        );
        Self { x1, y1, x2, y2 }
    }

    /// Degenerate rectangle covering a single pixel.
    #[inline]
    pub fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }
}
