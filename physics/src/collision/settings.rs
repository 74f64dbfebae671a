/*!
Collision container tuning constants.

Centralizing these keeps per-frame rebuild behavior easy to reason about and
tune; nothing here changes query semantics.
*/

/// Initial obstacle-reference capacity of a fresh
/// [`ObstacleMap`](super::map::ObstacleMap).
///
/// Maps are rebuilt every frame; starting at a realistic size avoids
/// reallocation churn during the level scan.
pub const DEFAULT_OBSTACLE_CAPACITY: usize = 32;
