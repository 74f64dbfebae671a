/*!
Best-obstacle selection.

When a query rectangle overlaps several obstacles at once, exactly one of
them must win: the one the character controller should rest on or be pushed
out of. The obstacle map folds every colliding candidate through
[`pick_best`] left-to-right in append order, with the running best as the
left operand and `None` as the seed.
*/

use super::obstacle::Obstacle;
use super::types::{GroundDirection, MovementMode, QueryRect};

/// Pick the more relevant of two candidates already known to collide with
/// `rect`. The rectangle comes pre-rotated for `mode` (`x1 <= x2`,
/// `y1 <= y2`).
///
/// Decision order:
/// 1. `None` on either side yields the other (fold identity).
/// 2. A solid candidate beats a one-way candidate, regardless of geometry.
/// 3. Both one-way: keep the platform whose surface is nearest against the
///    mode's gravity (the shortest platform drop). Ties keep `a`, which the
///    map's fold makes the earlier-added obstacle.
/// 4. Both solid: keep the tallest obstacle along the mode's axis. The
///    comparator sense differs from step 3 per mode; that asymmetry is a
///    fixed behavioral contract.
///
/// Each mode compares through a total order on ground positions, so folding
/// a fixed candidate set in any order selects the same winner.
pub fn pick_best<'a>(
    a: Option<&'a Obstacle>,
    b: Option<&'a Obstacle>,
    rect: &QueryRect,
    mode: MovementMode,
) -> Option<&'a Obstacle> {
    let (a, b) = match (a, b) {
        (None, b) => return b,
        (a, None) => return a,
        (Some(a), Some(b)) => (a, b),
    };

    // Solid obstacles are always preferable to one-way platforms.
    if a.is_solid() && !b.is_solid() {
        return Some(a);
    }
    if b.is_solid() && !a.is_solid() {
        return Some(b);
    }

    let &QueryRect { x1, y1, x2, y2 } = rect;

    if !a.is_solid() {
        // One-way platforms only: keep the shortest platform drop.
        let keep_a = match mode {
            MovementMode::Floor => {
                let ha = a.ground_position(x2, y2, GroundDirection::Down);
                let hb = b.ground_position(x2, y2, GroundDirection::Down);
                ha >= hb
            }
            MovementMode::RightWall => {
                let ha = a.ground_position(x2, y2, GroundDirection::Right);
                let hb = b.ground_position(x2, y2, GroundDirection::Right);
                ha >= hb
            }
            MovementMode::Ceiling => {
                let ha = a.ground_position(x2, y1, GroundDirection::Up);
                let hb = b.ground_position(x2, y1, GroundDirection::Up);
                ha < hb
            }
            MovementMode::LeftWall => {
                let ha = a.ground_position(x1, y2, GroundDirection::Left);
                let hb = b.ground_position(x1, y2, GroundDirection::Left);
                ha < hb
            }
        };
        return Some(if keep_a { a } else { b });
    }

    // Both solid: keep the tallest obstacle along the mode's axis.
    let keep_a = match mode {
        MovementMode::Floor => {
            let ha = a.ground_position(x2, y2, GroundDirection::Down);
            let hb = b.ground_position(x2, y2, GroundDirection::Down);
            ha < hb
        }
        MovementMode::LeftWall => {
            let ha = a.ground_position(x1, y2, GroundDirection::Left);
            let hb = b.ground_position(x1, y2, GroundDirection::Left);
            ha >= hb
        }
        MovementMode::Ceiling => {
            let ha = a.ground_position(x2, y1, GroundDirection::Up);
            let hb = b.ground_position(x2, y1, GroundDirection::Up);
            ha >= hb
        }
        MovementMode::RightWall => {
            let ha = a.ground_position(x2, y2, GroundDirection::Right);
            let hb = b.ground_position(x2, y2, GroundDirection::Right);
            ha < hb
        }
    };
    Some(if keep_a { a } else { b })
}
