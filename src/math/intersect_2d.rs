use super::{points_close, Point2, Vector2, TOLERANCE};

/// Result of intersecting two bounded segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCrossing {
    /// A single intersection point: a transversal crossing or an endpoint
    /// touch.
    Point(Point2),
    /// A collinear overlap run, reported by its two extreme points.
    Overlap(Point2, Point2),
}

/// Bounded segment-segment intersection in 2D.
///
/// Distinguishes a single crossing (or endpoint touch) from a collinear
/// overlap run. Returns `None` for disjoint, parallel-but-offset, or
/// zero-length segments. All comparisons are tolerance-based, never exact
/// float equality.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentCrossing> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return None;
    }

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() <= TOLERANCE * len_a * len_b {
        return collinear_overlap(a0, b0, b1, &da, len_a);
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some(SegmentCrossing::Point(point_at_param(a0, &da, t)))
    } else {
        None
    }
}

/// Handles the parallel case: either a collinear overlap run, an endpoint
/// touch, or nothing.
fn collinear_overlap(
    a0: &Point2,
    b0: &Point2,
    b1: &Point2,
    da: &Vector2,
    len_a: f64,
) -> Option<SegmentCrossing> {
    // Distance from b0 to the carrier line of a.
    let off = b0 - a0;
    let dist = (da.x * off.y - da.y * off.x).abs() / len_a;
    if dist > TOLERANCE * len_a.max(1.0) {
        return None;
    }

    // Project b's endpoints onto a's parameter space and clamp the shared
    // interval to [0, 1].
    let inv = 1.0 / (len_a * len_a);
    let tb0 = (b0 - a0).dot(da) * inv;
    let tb1 = (b1 - a0).dot(da) * inv;
    let (lo, hi) = if tb0 <= tb1 { (tb0, tb1) } else { (tb1, tb0) };
    let lo = lo.max(0.0);
    let hi = hi.min(1.0);
    if hi < lo - TOLERANCE {
        return None;
    }

    let start = point_at_param(a0, da, lo.clamp(0.0, 1.0));
    let end = point_at_param(a0, da, hi.clamp(0.0, 1.0));
    if points_close(&start, &end) {
        Some(SegmentCrossing::Point(start))
    } else {
        Some(SegmentCrossing::Overlap(start, end))
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at_param(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + dir.x * t, origin.y + dir.y * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn transversal_crossing() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
        )
        .unwrap();
        let SegmentCrossing::Point(pt) = hit else {
            panic!("expected a single point, got {hit:?}");
        };
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn no_crossing() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn crossing_outside_bounds() {
        // Carrier lines cross at (3, 0), beyond both segments.
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, -1.0),
            &p(3.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn shared_endpoint_touch() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 1.0),
        )
        .unwrap();
        let SegmentCrossing::Point(pt) = hit else {
            panic!("expected a single point, got {hit:?}");
        };
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
    }

    #[test]
    fn t_junction() {
        // b's endpoint sits in the middle of a.
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 3.0),
        )
        .unwrap();
        let SegmentCrossing::Point(pt) = hit else {
            panic!("expected a single point, got {hit:?}");
        };
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
    }

    #[test]
    fn collinear_overlap_run() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0),
        )
        .unwrap();
        let SegmentCrossing::Overlap(s, e) = hit else {
            panic!("expected an overlap run, got {hit:?}");
        };
        assert!((s.x - 1.0).abs() < TOLERANCE, "s={s:?}");
        assert!((e.x - 2.0).abs() < TOLERANCE, "e={e:?}");
    }

    #[test]
    fn collinear_contained_run() {
        // b lies entirely inside a.
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(4.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
        )
        .unwrap();
        let SegmentCrossing::Overlap(s, e) = hit else {
            panic!("expected an overlap run, got {hit:?}");
        };
        assert!((s.x - 1.0).abs() < TOLERANCE);
        assert!((e.x - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_endpoint_touch_is_single_point() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
        )
        .unwrap();
        assert!(
            matches!(hit, SegmentCrossing::Point(_)),
            "expected a single point, got {hit:?}"
        );
    }

    #[test]
    fn collinear_disjoint() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn parallel_offset_is_none() {
        let hit = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(0.0, 1.0),
            &p(2.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn degenerate_segment_is_none() {
        let hit = segment_segment_intersect_2d(
            &p(1.0, 1.0),
            &p(1.0, 1.0),
            &p(0.0, 0.0),
            &p(2.0, 2.0),
        );
        assert!(hit.is_none());
    }
}
