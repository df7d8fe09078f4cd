use crate::geometry::LineString;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentCrossing};
use crate::math::{points_close, Point2};

/// Tolerance-guarded vertex reduction for a polyline.
///
/// Scans forward from an anchor vertex, extending a chord while every skipped
/// vertex stays within `tolerance` of it, then shrinks the chord until it
/// crosses neither the already-simplified prefix, the not-yet-simplified
/// suffix, nor any curve in `context`. Endpoint-only contact is not a
/// crossing; a collinear overlap run is. A chord spanning a single original
/// segment is accepted unconditionally, which bounds the retry loop even for
/// self-intersecting input.
///
/// `tolerance <= 0` (or a curve of at most two vertices) returns the curve
/// verbatim. The input is never mutated.
#[must_use]
pub fn simplify(curve: &LineString, context: &[LineString], tolerance: f64) -> LineString {
    let pts = &curve.points;
    let n = pts.len();
    if n <= 2 || tolerance <= 0.0 {
        return curve.clone();
    }

    let mut out: Vec<Point2> = vec![pts[0]];
    let mut anchor = 0;
    while anchor < n - 1 {
        // Farthest candidate whose skipped vertices all stay within
        // tolerance of the chord.
        let mut candidate = anchor + 1;
        for j in anchor + 2..n {
            if max_deviation(pts, anchor, j) > tolerance {
                break;
            }
            candidate = j;
        }

        // Shrink until the chord is clear of everything already emitted, the
        // remaining suffix, and the context curves.
        while candidate > anchor + 1 && !chord_is_clear(pts, anchor, candidate, &out, context) {
            candidate -= 1;
        }

        out.push(pts[candidate]);
        anchor = candidate;
    }

    LineString::new(out)
}

/// Largest deviation of the vertices strictly between `i` and `j` from the
/// chord `pts[i] → pts[j]`.
fn max_deviation(pts: &[Point2], i: usize, j: usize) -> f64 {
    pts[i + 1..j]
        .iter()
        .map(|p| point_to_segment_dist(p, &pts[i], &pts[j]))
        .fold(0.0, f64::max)
}

/// True when the chord `pts[i] → pts[j]` crosses nothing it must avoid.
fn chord_is_clear(
    pts: &[Point2],
    i: usize,
    j: usize,
    prefix: &[Point2],
    context: &[LineString],
) -> bool {
    let a0 = pts[i];
    let a1 = pts[j];
    let blocked = |b0: &Point2, b1: &Point2| -> bool {
        match segment_segment_intersect_2d(&a0, &a1, b0, b1) {
            Some(SegmentCrossing::Point(p)) => !points_close(&p, &a0) && !points_close(&p, &a1),
            Some(SegmentCrossing::Overlap(p, q)) => !points_close(&p, &q),
            None => false,
        }
    };

    for w in prefix.windows(2) {
        if blocked(&w[0], &w[1]) {
            return false;
        }
    }
    for w in pts[j..].windows(2) {
        if blocked(&w[0], &w[1]) {
            return false;
        }
    }
    for curve in context {
        for w in curve.points.windows(2) {
            if blocked(&w[0], &w[1]) {
                return false;
            }
        }
    }
    true
}
