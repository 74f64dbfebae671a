/*!
Per-frame obstacle collection and its query API.

The obstacle map is rebuilt every simulation frame: created (or cleared),
filled while the level geometry and dynamic solids are scanned, then queried
any number of times by physics actors. It stores non-owning references; the
originating level or entity keeps ownership, and the same obstacle may sit
in several maps at once.
*/

use log::debug;

use super::obstacle::Obstacle;
use super::selector::pick_best;
use super::settings::DEFAULT_OBSTACLE_CAPACITY;
use super::types::{Layer, MovementMode, QueryRect};

/// An unordered, duplicate-tolerant set of non-owning obstacle references.
///
/// The borrow ties the map's lifetime to the obstacles it references: the
/// map can never outlive or free them, and obstacles stay immutable while
/// any map holds them.
#[derive(Default)]
pub struct ObstacleMap<'a> {
    obstacles: Vec<&'a Obstacle>,
}

impl<'a> ObstacleMap<'a> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_OBSTACLE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            obstacles: Vec::with_capacity(capacity),
        }
    }

    /// Append a reference. Duplicates are permitted; append order only
    /// matters as the fold order for deterministic tie-breaks.
    pub fn add(&mut self, obstacle: &'a Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Drop all references without touching the obstacles themselves; the
    /// map is reusable for the next frame.
    pub fn clear(&mut self) {
        debug!(
            "obstacle map cleared, {} references dropped",
            self.obstacles.len()
        );
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// The single most relevant obstacle overlapping `rect` under `mode`,
    /// or `None` when nothing passes the layer filter and collides.
    ///
    /// Linear scan: colliding candidates fold through
    /// [`pick_best`](super::selector::pick_best) with the running best as
    /// the left operand, so ties keep the earlier-added obstacle.
    pub fn best_obstacle_at(
        &self,
        rect: &QueryRect,
        mode: MovementMode,
        layer_filter: Layer,
    ) -> Option<&'a Obstacle> {
        let mut best = None;

        for &obstacle in &self.obstacles {
            if !ignore_obstacle(obstacle, layer_filter) && obstacle.collides(rect) {
                best = pick_best(best, Some(obstacle), rect, mode);
            }
        }

        best
    }

    /// Is any obstacle, solid or one-way, at the given pixel?
    pub fn obstacle_exists(&self, x: i32, y: i32, layer_filter: Layer) -> bool {
        let point = QueryRect::point(x, y);
        self.obstacles
            .iter()
            .any(|&obstacle| !ignore_obstacle(obstacle, layer_filter) && obstacle.collides(&point))
    }

    /// Is any fully solid obstacle at the given pixel?
    pub fn solid_exists(&self, x: i32, y: i32, layer_filter: Layer) -> bool {
        let point = QueryRect::point(x, y);
        self.obstacles.iter().any(|&obstacle| {
            !ignore_obstacle(obstacle, layer_filter)
                && obstacle.collides(&point)
                && obstacle.is_solid()
        })
    }
}

/// Layer filter policy: default-layer obstacles are visible to every query;
/// a non-default filter hides only obstacles on a different non-default
/// layer; a `Default` filter disables filtering entirely.
#[inline]
fn ignore_obstacle(obstacle: &Obstacle, layer_filter: Layer) -> bool {
    let layer = obstacle.layer();
    layer_filter != Layer::Default && layer != Layer::Default && layer != layer_filter
}
