use crate::geometry::{Contour, Polygon};
use crate::math::polygon_2d::{bottom_right_index, signed_area_2d, turn_2d};
use crate::math::TOLERANCE;
use crate::operations::locate::{locate_in_ring, RingLocation};

/// Rotational direction of a ring's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Ccw,
    Cw,
}

/// Signed winding of a ring.
///
/// Tests the turn direction at the bottommost-then-rightmost vertex — convex
/// for any simple ring — and falls back to the shoelace sign when that corner
/// is collinear. Degenerate rings report counter-clockwise.
#[must_use]
pub fn ring_winding(contour: &Contour) -> Winding {
    let ring = contour.ring();
    let n = ring.len();
    if n < 3 {
        return Winding::Ccw;
    }

    let k = bottom_right_index(&ring);
    let prev = &ring[(k + n - 1) % n];
    let next = &ring[(k + 1) % n];
    let turn = turn_2d(prev, &ring[k], next);

    if turn > TOLERANCE {
        Winding::Ccw
    } else if turn < -TOLERANCE {
        Winding::Cw
    } else if signed_area_2d(&ring) >= 0.0 {
        Winding::Ccw
    } else {
        Winding::Cw
    }
}

/// Number of *other* rings of `polygon` that contain ring `ring_index`.
///
/// Containment is decided by ray casting alone — winding is ignored. This is
/// the ring's nesting depth: even depth means it bounds interior, odd depth
/// means it bounds a hole.
#[must_use]
pub fn nesting_depth(polygon: &Polygon, ring_index: usize) -> usize {
    let Some(target) = polygon.contours.get(ring_index) else {
        return 0;
    };
    polygon
        .contours
        .iter()
        .enumerate()
        .filter(|(j, other)| *j != ring_index && ring_contains_ring(other, target))
        .count()
}

/// True when `outer` contains `inner`'s vertices.
///
/// Vertices sitting exactly on `outer`'s boundary are skipped; the first
/// vertex with a definite answer decides. Coincident rings contain nothing.
pub(crate) fn ring_contains_ring(outer: &Contour, inner: &Contour) -> bool {
    for point in inner.ring() {
        match locate_in_ring(&point, outer) {
            RingLocation::Inside => return true,
            RingLocation::Outside => return false,
            RingLocation::OnBoundary => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Contour {
        Contour::new(vec![
            p(x0, y0),
            p(x0 + size, y0),
            p(x0 + size, y0 + size),
            p(x0, y0 + size),
        ])
    }

    #[test]
    fn ccw_square() {
        assert_eq!(ring_winding(&square(0.0, 0.0, 1.0)), Winding::Ccw);
    }

    #[test]
    fn cw_square() {
        assert_eq!(ring_winding(&square(0.0, 0.0, 1.0).reversed()), Winding::Cw);
    }

    #[test]
    fn winding_with_collinear_bottom_edge() {
        // Extra collinear vertex in the middle of the bottom edge; the
        // bottom-right corner is still convex.
        let ring = Contour::new(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
        ]);
        assert_eq!(ring_winding(&ring), Winding::Ccw);
    }

    #[test]
    fn nesting_depths_in_onion() {
        let polygon = Polygon::new(vec![
            square(0.0, 0.0, 6.0),
            square(1.0, 1.0, 4.0),
            square(2.0, 2.0, 2.0),
        ]);
        assert_eq!(nesting_depth(&polygon, 0), 0);
        assert_eq!(nesting_depth(&polygon, 1), 1);
        assert_eq!(nesting_depth(&polygon, 2), 2);
    }

    #[test]
    fn nesting_ignores_winding() {
        let polygon = Polygon::new(vec![square(0.0, 0.0, 4.0), square(1.0, 1.0, 1.0).reversed()]);
        assert_eq!(nesting_depth(&polygon, 1), 1);
        assert_eq!(nesting_depth(&polygon, 0), 0);
    }

    #[test]
    fn siblings_do_not_nest() {
        let polygon = Polygon::new(vec![square(0.0, 0.0, 1.0), square(5.0, 0.0, 1.0)]);
        assert_eq!(nesting_depth(&polygon, 0), 0);
        assert_eq!(nesting_depth(&polygon, 1), 0);
    }

    #[test]
    fn shared_boundary_vertices_are_skipped() {
        // Inner ring shares its left edge with the outer ring; the first
        // definite vertex decides.
        let outer = square(0.0, 0.0, 4.0);
        let inner = Contour::new(vec![p(0.0, 1.0), p(1.0, 1.0), p(1.0, 2.0), p(0.0, 2.0)]);
        assert!(ring_contains_ring(&outer, &inner));
    }
}
