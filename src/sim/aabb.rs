//! Axis-aligned bounding boxes
//!
//! Every entity in the game is an axis-aligned rectangle; this is the sole
//! geometric primitive. Overlap is strict: rectangles that only share an
//! edge or a corner do not collide.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both > 0
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rectangle {w}x{h}");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The same extents at a hypothetical position (collision probes)
    #[inline]
    pub fn at(&self, pos: Vec2) -> Self {
        Self {
            pos,
            size: self.size,
        }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: true iff the rectangles share positive area
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_and_miss() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(20.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(0.0, -15.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Aabb::new(10.0, 0.0, 10.0, 10.0))); // right edge
        assert!(!a.intersects(&Aabb::new(-10.0, 0.0, 10.0, 10.0))); // left edge
        assert!(!a.intersects(&Aabb::new(0.0, 10.0, 10.0, 10.0))); // bottom edge
        assert!(!a.intersects(&Aabb::new(10.0, 10.0, 5.0, 5.0))); // corner
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = Aabb::new(0.0, 0.0, 20.0, 20.0);
        let inner = Aabb::new(5.0, 5.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_probe_at_keeps_extents() {
        let a = Aabb::new(0.0, 0.0, 8.0, 8.0);
        let probe = a.at(Vec2::new(100.0, 50.0));
        assert_eq!(probe.pos, Vec2::new(100.0, 50.0));
        assert_eq!(probe.size, a.size);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            aw in 0.1f32..50.0, ah in 0.1f32..50.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            bw in 0.1f32..50.0, bh in 0.1f32..50.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn separated_rects_never_overlap(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            aw in 0.1f32..50.0, ah in 0.1f32..50.0,
            gap in 0.0f32..50.0,
            by in -200.0f32..200.0,
            bw in 0.1f32..50.0, bh in 0.1f32..50.0,
        ) {
            // b starts at or past a's right edge; a zero gap is touching,
            // which still must not collide
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(ax + aw + gap, by, bw, bh);
            prop_assert!(!a.intersects(&b));
        }
    }
}
