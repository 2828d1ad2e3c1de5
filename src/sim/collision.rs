//! Collision resolution against static blocks
//!
//! Movement is resolved one axis at a time from the pre-movement position:
//! the horizontal probe uses the current y, the vertical probe the current
//! x. A blocked component snaps the tentative position to the block's near
//! edge and zeroes that velocity component, so later blocks in the list
//! cannot re-snap the same axis within one tick.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::Block;
use crate::consts::GROUND_PROBE;

/// Resolve a tentative move of `body` to `next` against every block.
///
/// Returns the corrected position and velocity.
pub fn resolve_blocks(
    body: &Aabb,
    mut vel: Vec2,
    mut next: Vec2,
    blocks: &[Block],
) -> (Vec2, Vec2) {
    for block in blocks {
        // Horizontal probe at the current y
        if block.aabb.intersects(&body.at(Vec2::new(next.x, body.pos.y))) {
            if vel.x > 0.0 {
                next.x = block.aabb.pos.x - body.size.x;
            } else if vel.x < 0.0 {
                next.x = block.aabb.right();
            }
            vel.x = 0.0;
        }
        // Vertical probe at the current x
        if block.aabb.intersects(&body.at(Vec2::new(body.pos.x, next.y))) {
            if vel.y > 0.0 {
                next.y = block.aabb.pos.y - body.size.y;
            } else if vel.y < 0.0 {
                next.y = block.aabb.bottom();
            }
            vel.y = 0.0;
        }
    }
    (next, vel)
}

/// A 1-unit downward probe: standing on (not merely near) a block
pub fn on_ground(body: &Aabb, blocks: &[Block]) -> bool {
    let probe = body.at(body.pos + Vec2::new(0.0, GROUND_PROBE));
    blocks.iter().any(|b| b.aabb.intersects(&probe))
}

/// Would a horizontal step collide with any block? (mob patrol turnaround)
pub fn blocked_horizontally(body: &Aabb, next_x: f32, blocks: &[Block]) -> bool {
    let probe = body.at(Vec2::new(next_x, body.pos.y));
    blocks.iter().any(|b| b.aabb.intersects(&probe))
}
