/*!
Solid and one-way obstacle geometry.

An obstacle is an immutable region of terrain in level pixel coordinates:
either a fully solid rectangle or a per-column height map (sloped terrain),
tagged with a layer and a solidity class. Obstacle maps hold references to
obstacles and never mutate them; the originating level or entity owns the
memory.
*/

use crate::flags::{ObstacleFlag, ObstacleFlags};

use super::types::{GroundDirection, Layer, QueryRect, Vec2};

/// Geometric profile of an obstacle within its bounding rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObstacleShape {
    /// Every pixel of the bounding rectangle is solid.
    Block,
    /// Per-column solid height, one entry per column of width. Columns are
    /// anchored to the bottom edge, or to the top edge with
    /// [`ObstacleFlag::MirrorY`]; entries are clamped to the obstacle
    /// height. An entry of 0 leaves the column empty.
    HeightMap(Vec<u16>),
}

/// An immutable piece of terrain: fully solid or one-way, on a layer.
///
/// Bounds are inclusive pixels: a 16x16 obstacle at (0, 0) covers
/// (0, 0)..=(15, 15).
#[derive(Clone, Debug)]
pub struct Obstacle {
    position: Vec2,
    width: i32,
    height: i32,
    shape: ObstacleShape,
    flags: ObstacleFlags,
    layer: Layer,
}

impl Obstacle {
    /// Preconditions: `width > 0`, `height > 0`, and a height-map shape must
    /// carry exactly one entry per column of width.
    pub fn new(
        position: Vec2,
        width: i32,
        height: i32,
        shape: ObstacleShape,
        flags: ObstacleFlags,
        layer: Layer,
    ) -> Self {
        debug_assert!(width > 0 && height > 0, "obstacle with empty extent");
        if let ObstacleShape::HeightMap(columns) = &shape {
            debug_assert!(
                columns.len() == width as usize,
                "height map needs one entry per column of width"
            );
        }
        Self {
            position,
            width,
            height,
            shape,
            flags,
            layer,
        }
    }

    /// Fully solid rectangle on the default layer.
    pub fn solid_box(position: Vec2, width: i32, height: i32) -> Self {
        Self::new(
            position,
            width,
            height,
            ObstacleShape::Block,
            ObstacleFlags::default().with(ObstacleFlag::Solid),
            Layer::default(),
        )
    }

    /// One-way platform on the default layer: same extent as a solid box,
    /// ranked as semi-solid by the selector.
    pub fn one_way_platform(position: Vec2, width: i32, height: i32) -> Self {
        Self::new(
            position,
            width,
            height,
            ObstacleShape::Block,
            ObstacleFlags::default(),
            Layer::default(),
        )
    }

    /// Solid sloped terrain from a per-column height profile; the width is
    /// the profile length.
    pub fn slope(position: Vec2, height: i32, columns: Vec<u16>) -> Self {
        let width = columns.len() as i32;
        Self::new(
            position,
            width,
            height,
            ObstacleShape::HeightMap(columns),
            ObstacleFlags::default().with(ObstacleFlag::Solid),
            Layer::default(),
        )
    }

    /// Builder-style layer override for the convenience constructors.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.position.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.position.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.position.x + self.width - 1
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.position.y + self.height - 1
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fully solid obstacles block from every direction; the rest are
    /// one-way platforms.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.flags.has(ObstacleFlag::Solid)
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Does the obstacle's solid extent overlap the query rectangle?
    pub fn collides(&self, rect: &QueryRect) -> bool {
        if rect.x2 < self.left()
            || rect.x1 > self.right()
            || rect.y2 < self.top()
            || rect.y1 > self.bottom()
        {
            return false;
        }

        match &self.shape {
            ObstacleShape::Block => true,
            ObstacleShape::HeightMap(_) => {
                let x1 = rect.x1.max(self.left());
                let x2 = rect.x2.min(self.right());
                (x1..=x2).any(|x| match self.column_span(x) {
                    Some((top, bottom)) => rect.y1 <= bottom && rect.y2 >= top,
                    None => false,
                })
            }
        }
    }

    /// Coordinate of the obstacle's surface seen from `(x, y)` looking in
    /// `direction`, used by the selector as a comparable scalar.
    ///
    /// The query point is clamped into the bounding rectangle. When the
    /// clamped column (or row) holds no solid pixel, the result is one past
    /// the far edge in the query direction.
    pub fn ground_position(&self, x: i32, y: i32, direction: GroundDirection) -> i32 {
        match direction {
            // Floor surface: top of the solid run in the column.
            GroundDirection::Down => match self.column_span(x.clamp(self.left(), self.right())) {
                Some((top, _)) => top,
                None => self.bottom() + 1,
            },
            // Ceiling surface: bottom of the solid run in the column.
            GroundDirection::Up => match self.column_span(x.clamp(self.left(), self.right())) {
                Some((_, bottom)) => bottom,
                None => self.top() - 1,
            },
            // Left-wall surface: rightmost solid column in the row.
            GroundDirection::Left => {
                let y = y.clamp(self.top(), self.bottom());
                (self.left()..=self.right())
                    .rev()
                    .find(|&x| self.solid_at(x, y))
                    .unwrap_or(self.left() - 1)
            }
            // Right-wall surface: leftmost solid column in the row.
            GroundDirection::Right => {
                let y = y.clamp(self.top(), self.bottom());
                (self.left()..=self.right())
                    .find(|&x| self.solid_at(x, y))
                    .unwrap_or(self.right() + 1)
            }
        }
    }

    /// Vertical solid run `[top, bottom]` of the given column, if any.
    ///
    /// Columns hold a single contiguous run: the whole height for blocks,
    /// an edge-anchored run for height maps.
    fn column_span(&self, x: i32) -> Option<(i32, i32)> {
        if x < self.left() || x > self.right() {
            return None;
        }

        match &self.shape {
            ObstacleShape::Block => Some((self.top(), self.bottom())),
            ObstacleShape::HeightMap(columns) => {
                let index = if self.flags.has(ObstacleFlag::MirrorX) {
                    (self.right() - x) as usize
                } else {
                    (x - self.left()) as usize
                };
                let run = i32::from(columns[index]).min(self.height);
                if run == 0 {
                    return None;
                }
                if self.flags.has(ObstacleFlag::MirrorY) {
                    Some((self.top(), self.top() + run - 1))
                } else {
                    Some((self.bottom() - run + 1, self.bottom()))
                }
            }
        }
    }

    #[inline]
    fn solid_at(&self, x: i32, y: i32) -> bool {
        self.column_span(x)
            .is_some_and(|(top, bottom)| top <= y && y <= bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Obstacle {
        // Rising slope: column heights 1..=4 over a 4x4 bounding box at
        // (0, 0). Surfaces (top of run) sit at y = 3, 2, 1, 0.
        Obstacle::slope(Vec2::new(0, 0), 4, vec![1, 2, 3, 4])
    }

    #[test]
    fn block_bounds_are_inclusive() {
        let block = Obstacle::solid_box(Vec2::new(10, 20), 16, 8);
        assert_eq!(block.right(), 25);
        assert_eq!(block.bottom(), 27);

        assert!(block.collides(&QueryRect::point(10, 20)));
        assert!(block.collides(&QueryRect::point(25, 27)));
        assert!(!block.collides(&QueryRect::point(26, 27)));
        assert!(!block.collides(&QueryRect::point(10, 28)));
    }

    #[test]
    fn block_overlap_uses_both_axes() {
        let block = Obstacle::solid_box(Vec2::new(0, 0), 10, 10);
        // Overlaps in x only.
        assert!(!block.collides(&QueryRect::new(5, 20, 8, 30)));
        // Overlaps in y only.
        assert!(!block.collides(&QueryRect::new(20, 5, 30, 8)));
        // Overlaps in both.
        assert!(block.collides(&QueryRect::new(5, 5, 30, 30)));
    }

    #[test]
    fn block_ground_positions_are_its_edges() {
        let block = Obstacle::solid_box(Vec2::new(10, 20), 16, 8);
        assert_eq!(block.ground_position(12, 22, GroundDirection::Down), 20);
        assert_eq!(block.ground_position(12, 22, GroundDirection::Up), 27);
        assert_eq!(block.ground_position(12, 22, GroundDirection::Left), 25);
        assert_eq!(block.ground_position(12, 22, GroundDirection::Right), 10);
    }

    #[test]
    fn ground_position_clamps_the_query_point() {
        let block = Obstacle::solid_box(Vec2::new(10, 20), 16, 8);
        // Far outside the box on both axes; same answers as inside.
        assert_eq!(block.ground_position(-100, -100, GroundDirection::Down), 20);
        assert_eq!(block.ground_position(1000, 1000, GroundDirection::Right), 10);
    }

    #[test]
    fn height_map_surface_follows_the_profile() {
        let ramp = ramp();
        assert_eq!(ramp.ground_position(0, 3, GroundDirection::Down), 3);
        assert_eq!(ramp.ground_position(1, 3, GroundDirection::Down), 2);
        assert_eq!(ramp.ground_position(2, 3, GroundDirection::Down), 1);
        assert_eq!(ramp.ground_position(3, 3, GroundDirection::Down), 0);
        // Bottom-anchored runs always reach the bottom edge.
        assert_eq!(ramp.ground_position(1, 3, GroundDirection::Up), 3);
    }

    #[test]
    fn height_map_collision_is_per_column() {
        let ramp = ramp();
        // The area above the short columns is empty even though it is inside
        // the bounding box.
        assert!(!ramp.collides(&QueryRect::point(0, 0)));
        assert!(!ramp.collides(&QueryRect::point(1, 1)));
        assert!(ramp.collides(&QueryRect::point(3, 0)));
        assert!(ramp.collides(&QueryRect::point(0, 3)));
        // A rectangle spanning the empty corner misses; widening it to touch
        // a tall column hits.
        assert!(!ramp.collides(&QueryRect::new(0, 0, 1, 1)));
        assert!(ramp.collides(&QueryRect::new(0, 0, 3, 1)));
    }

    #[test]
    fn height_map_row_scans_find_wall_surfaces() {
        let ramp = ramp();
        // Row y=1 is solid for columns 2 and 3 only.
        assert_eq!(ramp.ground_position(0, 1, GroundDirection::Right), 2);
        assert_eq!(ramp.ground_position(0, 1, GroundDirection::Left), 3);
        // Row y=3 is solid across the whole width.
        assert_eq!(ramp.ground_position(0, 3, GroundDirection::Right), 0);
    }

    #[test]
    fn mirror_x_reverses_the_profile() {
        let mirrored = Obstacle::new(
            Vec2::new(0, 0),
            4,
            4,
            ObstacleShape::HeightMap(vec![1, 2, 3, 4]),
            ObstacleFlags::default()
                .with(ObstacleFlag::Solid)
                .with(ObstacleFlag::MirrorX),
            Layer::default(),
        );
        // Falling slope: tallest column now on the left.
        assert_eq!(mirrored.ground_position(0, 3, GroundDirection::Down), 0);
        assert_eq!(mirrored.ground_position(3, 3, GroundDirection::Down), 3);
    }

    #[test]
    fn mirror_y_anchors_runs_to_the_top() {
        let ceiling_ramp = Obstacle::new(
            Vec2::new(0, 0),
            4,
            4,
            ObstacleShape::HeightMap(vec![1, 2, 3, 4]),
            ObstacleFlags::default()
                .with(ObstacleFlag::Solid)
                .with(ObstacleFlag::MirrorY),
            Layer::default(),
        );
        // Runs grow downward from the top edge.
        assert_eq!(ceiling_ramp.ground_position(0, 0, GroundDirection::Up), 0);
        assert_eq!(ceiling_ramp.ground_position(3, 0, GroundDirection::Up), 3);
        assert_eq!(ceiling_ramp.ground_position(0, 0, GroundDirection::Down), 0);
        assert!(!ceiling_ramp.collides(&QueryRect::point(0, 3)));
        assert!(ceiling_ramp.collides(&QueryRect::point(3, 3)));
    }

    #[test]
    fn empty_column_yields_the_past_edge_sentinel() {
        let gapped = Obstacle::slope(Vec2::new(0, 0), 4, vec![0, 4, 4, 0]);
        // Column 0 has no solid pixel: one past the far edge per direction.
        assert_eq!(gapped.ground_position(0, 0, GroundDirection::Down), 4);
        assert_eq!(gapped.ground_position(0, 0, GroundDirection::Up), -1);
        assert!(!gapped.collides(&QueryRect::new(0, 0, 0, 3)));
    }

    #[test]
    fn height_map_entries_clamp_to_obstacle_height() {
        let clamped = Obstacle::slope(Vec2::new(0, 0), 4, vec![100, 1, 1, 1]);
        // An over-tall entry behaves as a full column, not an overflow.
        assert_eq!(clamped.ground_position(0, 0, GroundDirection::Down), 0);
    }

    #[test]
    fn one_way_platform_reports_not_solid() {
        let platform = Obstacle::one_way_platform(Vec2::new(0, 100), 32, 8);
        assert!(!platform.is_solid());
        assert!(Obstacle::solid_box(Vec2::new(0, 100), 32, 8).is_solid());
    }

    #[test]
    fn with_layer_overrides_the_default() {
        let tagged = Obstacle::solid_box(Vec2::new(0, 0), 8, 8).with_layer(Layer::A);
        assert_eq!(tagged.layer(), Layer::A);
        assert_eq!(Obstacle::solid_box(Vec2::new(0, 0), 8, 8).layer(), Layer::Default);
    }
}
