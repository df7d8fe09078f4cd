use crate::geometry::Polygon;
use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentCrossing};
use crate::math::{points_close, Point2, TOLERANCE};

/// Which operand a boundary segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSource {
    Subject,
    Clipping,
}

/// A directed piece of one operand's boundary.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySegment {
    pub start: Point2,
    pub end: Point2,
    pub source: PolygonSource,
}

impl BoundarySegment {
    /// Midpoint, used to classify the whole segment once splitting has cut it
    /// at every crossing.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }
}

/// Decomposes a polygon's rings into directed boundary segments.
///
/// Consecutive ring vertices pair up, wrapping at the end. Degenerate rings
/// and zero-length edges are dropped — zero contribution, not an error.
#[must_use]
pub fn decompose(polygon: &Polygon, source: PolygonSource) -> Vec<BoundarySegment> {
    let mut segments = Vec::new();
    for contour in &polygon.contours {
        let ring = contour.ring();
        let n = ring.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            let start = ring[i];
            let end = ring[(i + 1) % n];
            if !points_close(&start, &end) {
                segments.push(BoundarySegment { start, end, source });
            }
        }
    }
    segments
}

/// Splits both segment sets at every pairwise intersection.
///
/// Each crossing is computed once and the identical point value is recorded
/// on both sides, so the stitched vertex set is exactly the union of original
/// vertices and computed intersections — a point that sits exactly on a
/// boundary can never end up strictly inside a split piece.
#[must_use]
pub fn split_at_crossings(
    subject: &[BoundarySegment],
    clipping: &[BoundarySegment],
) -> (Vec<BoundarySegment>, Vec<BoundarySegment>) {
    let mut subject_cuts: Vec<Vec<Point2>> = vec![Vec::new(); subject.len()];
    let mut clipping_cuts: Vec<Vec<Point2>> = vec![Vec::new(); clipping.len()];

    for (i, s) in subject.iter().enumerate() {
        for (j, c) in clipping.iter().enumerate() {
            match segment_segment_intersect_2d(&s.start, &s.end, &c.start, &c.end) {
                Some(SegmentCrossing::Point(p)) => {
                    subject_cuts[i].push(p);
                    clipping_cuts[j].push(p);
                }
                Some(SegmentCrossing::Overlap(p, q)) => {
                    subject_cuts[i].extend([p, q]);
                    clipping_cuts[j].extend([p, q]);
                }
                None => {}
            }
        }
    }

    let split = |segments: &[BoundarySegment], cuts: Vec<Vec<Point2>>| {
        let mut out = Vec::new();
        for (seg, pts) in segments.iter().zip(cuts) {
            for (start, end) in split_piece(&seg.start, &seg.end, pts) {
                out.push(BoundarySegment {
                    start,
                    end,
                    source: seg.source,
                });
            }
        }
        out
    };

    (split(subject, subject_cuts), split(clipping, clipping_cuts))
}

/// Splits the edges of an open chain at their crossings with a boundary.
/// Returns the chain's pieces in traversal order.
pub(crate) fn split_chain_at_boundary(
    chain: &[Point2],
    boundary: &[BoundarySegment],
) -> Vec<(Point2, Point2)> {
    let mut pieces = Vec::new();
    for window in chain.windows(2) {
        let (start, end) = (window[0], window[1]);
        if points_close(&start, &end) {
            continue;
        }
        let mut cuts = Vec::new();
        for seg in boundary {
            match segment_segment_intersect_2d(&start, &end, &seg.start, &seg.end) {
                Some(SegmentCrossing::Point(p)) => cuts.push(p),
                Some(SegmentCrossing::Overlap(p, q)) => cuts.extend([p, q]),
                None => {}
            }
        }
        pieces.extend(split_piece(&start, &end, cuts));
    }
    pieces
}

/// Splits one directed edge at the given points, ordered by their projection
/// onto it; cuts at (or beyond) the endpoints are ignored.
fn split_piece(start: &Point2, end: &Point2, cuts: Vec<Point2>) -> Vec<(Point2, Point2)> {
    let dir = end - start;
    let len_sq = dir.norm_squared();

    let mut stops: Vec<(f64, Point2)> = cuts
        .into_iter()
        .map(|p| ((p - start).dot(&dir) / len_sq, p))
        .filter(|(t, _)| *t > TOLERANCE && *t < 1.0 - TOLERANCE)
        .collect();
    stops.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut points = vec![*start];
    for (_, p) in stops {
        if !points_close(&points[points.len() - 1], &p) {
            points.push(p);
        }
    }
    let last = points.len() - 1;
    if points_close(&points[last], end) {
        points[last] = *end;
    } else {
        points.push(*end);
    }

    points
        .windows(2)
        .filter(|w| !points_close(&w[0], &w[1]))
        .map(|w| (w[0], w[1]))
        .collect()
}
