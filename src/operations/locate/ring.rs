use crate::geometry::Contour;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{distance_tolerance, Point2};

/// Classification of a point relative to a single ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies a point against one ring by crossing parity.
///
/// Boundary coincidence is checked first: a point within tolerance of any
/// edge reports `OnBoundary`. Otherwise a horizontal ray to the right is cast
/// and edge crossings are counted with a half-open rule on the edge's y span,
/// so a vertex lying exactly on the ray is never counted twice.
///
/// Degenerate rings (fewer than 3 distinct vertices) contain nothing.
#[must_use]
pub fn locate_in_ring(point: &Point2, contour: &Contour) -> RingLocation {
    let ring = contour.ring();
    let n = ring.len();
    if n < 3 {
        return RingLocation::Outside;
    }

    let tol = distance_tolerance(point);
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if point_to_segment_dist(point, a, b) <= tol {
            return RingLocation::OnBoundary;
        }
    }

    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let t = (point.y - a.y) / (b.y - a.y);
            let x = a.x + t * (b.x - a.x);
            if x > point.x {
                inside = !inside;
            }
        }
    }

    if inside {
        RingLocation::Inside
    } else {
        RingLocation::Outside
    }
}
