pub mod collision;
pub mod flags;

pub use collision::{
    GroundDirection, Layer, MovementMode, Obstacle, ObstacleMap, ObstacleShape, QueryRect, Vec2,
    pick_best,
};
pub use flags::{BitmaskFlags, FlagBitmask, ObstacleFlag, ObstacleFlags};
