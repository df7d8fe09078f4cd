use crate::geometry::Polygon;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{distance_tolerance, Point2, TOLERANCE};
use crate::operations::locate::{locate_in_polygon, RingLocation};

use super::split::BoundarySegment;

/// Direction of the coincident stretch of the other polygon's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySide {
    Same,
    Opposite,
}

/// Classification of a boundary segment relative to the other polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClass {
    Inside,
    Outside,
    Boundary(BoundarySide),
}

/// Classifies a split segment by its midpoint.
///
/// Splitting has already cut every segment at each crossing, so the midpoint
/// is strictly inside, strictly outside, or the whole segment runs along the
/// other polygon's boundary. In the boundary case the collinear edge
/// containing the midpoint decides whether the two boundaries run the same
/// or the opposite way.
#[must_use]
pub fn classify_segment(segment: &BoundarySegment, other: &Polygon) -> SegmentClass {
    let mid = segment.midpoint();
    match locate_in_polygon(&mid, other) {
        RingLocation::Inside => SegmentClass::Inside,
        RingLocation::Outside => SegmentClass::Outside,
        RingLocation::OnBoundary => SegmentClass::Boundary(boundary_side(segment, &mid, other)),
    }
}

/// Finds the edge of `other` that is collinear with `segment` and contains
/// its midpoint, and compares directions. A bare point touch with no
/// collinear edge reports `Same`, so the keep-once rule applies.
fn boundary_side(segment: &BoundarySegment, mid: &Point2, other: &Polygon) -> BoundarySide {
    let dir = segment.end - segment.start;
    let tol = distance_tolerance(mid);

    for contour in &other.contours {
        let ring = contour.ring();
        let n = ring.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            let a = &ring[i];
            let b = &ring[(i + 1) % n];
            if point_to_segment_dist(mid, a, b) > tol {
                continue;
            }
            let edge = b - a;
            let cross = dir.x * edge.y - dir.y * edge.x;
            if cross.abs() > TOLERANCE * dir.norm() * edge.norm() {
                // The midpoint only touches this edge; keep looking for a
                // collinear one.
                continue;
            }
            return if dir.dot(&edge) >= 0.0 {
                BoundarySide::Same
            } else {
                BoundarySide::Opposite
            };
        }
    }
    BoundarySide::Same
}
