/*!
Collision root module.

This module re-exports the submodules that implement the obstacle map and the
best-obstacle resolution used by rotated-gravity platforming (walking on
floors, walls and ceilings). The code is split for clarity:

- types:    shared data types (movement modes, layers, query rectangles)
- obstacle: solid / one-way terrain geometry and ground-position queries
- selector: disambiguation among overlapping colliding candidates
- map:      the per-frame obstacle collection and its query API
- settings: container tuning constants

Query coordinates always arrive pre-rotated into the frame implied by the
movement mode; nothing in this module performs rotation.
*/

pub mod map;
pub mod obstacle;
pub mod selector;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use map::ObstacleMap;
pub use obstacle::{Obstacle, ObstacleShape};
pub use selector::pick_best;
pub use types::{GroundDirection, Layer, MovementMode, QueryRect, Vec2};
