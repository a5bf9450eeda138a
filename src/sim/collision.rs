//! Axis-aligned bounding box collision test
//!
//! Everything in Gem Dash is a rectangle, so the single collision primitive
//! is a pure AABB overlap check over two rectangles.

use glam::Vec2;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// True iff the rectangles overlap on both axes.
///
/// Strict inequalities: rectangles that merely share a boundary edge do
/// NOT count as colliding.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_rects() {
        let a = rect(0.0, 0.0, 40.0, 40.0);
        let b = rect(30.0, 30.0, 40.0, 40.0);
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = rect(0.0, 0.0, 40.0, 40.0);
        let b = rect(100.0, 0.0, 40.0, 40.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_contained_rect() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        let a = rect(0.0, 0.0, 40.0, 40.0);
        // Shares only the vertical edge x = 40
        let b = rect(40.0, 0.0, 40.0, 40.0);
        assert!(!rects_overlap(&a, &b));

        // Shares only the horizontal edge y = 40
        let c = rect(0.0, 40.0, 40.0, 40.0);
        assert!(!rects_overlap(&a, &c));

        // Corner touch only
        let d = rect(40.0, 40.0, 40.0, 40.0);
        assert!(!rects_overlap(&a, &d));
    }

    #[test]
    fn test_player_obstacle_scenario() {
        // Player at x=180 width 40 vs obstacle at x=180 width 50 in the
        // same y-band: x ranges [180,220) and [180,230) overlap.
        let player = rect(180.0, 520.0, 40.0, 40.0);
        let obstacle = rect(180.0, 510.0, 50.0, 30.0);
        assert!(rects_overlap(&player, &obstacle));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn prop_shared_edge_never_collides(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
            bw in 1.0f32..200.0,
        ) {
            let a = rect(x, y, w, h);
            // b starts exactly where a ends on the x axis
            let b = rect(x + w, y, bw, h);
            prop_assert!(!rects_overlap(&a, &b));
        }
    }
}
