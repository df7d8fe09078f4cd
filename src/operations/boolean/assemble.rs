use crate::error::{OperationError, Result};
use crate::geometry::{Contour, Polygon};
use crate::math::polygon_2d::rotate_to_canonical_start;
use crate::math::{points_close, Point2};
use crate::operations::orient::{orient_polygon_in_place, ring_contains_ring};

/// A directed edge surviving selection, ready for stitching.
pub(crate) type DirectedEdge = (Point2, Point2);

/// Removes duplicated directed segments (same endpoints, same direction).
///
/// Collinear shared boundaries can survive from several ring pieces; the
/// result must carry each exactly once.
pub(crate) fn dedup_segments(segments: Vec<DirectedEdge>) -> Vec<DirectedEdge> {
    let mut out: Vec<DirectedEdge> = Vec::with_capacity(segments.len());
    for seg in segments {
        let duplicate = out
            .iter()
            .any(|(s, e)| points_close(s, &seg.0) && points_close(e, &seg.1));
        if !duplicate {
            out.push(seg);
        }
    }
    out
}

/// Chains directed segments into closed rings by shared endpoints.
///
/// At a junction with several outgoing candidates the most counter-clockwise
/// turn wins (deterministic tie-break); an immediate backtrack is taken only
/// when nothing else leaves the vertex. Chains shorter than 3 distinct
/// vertices are dropped as degenerate.
///
/// # Errors
///
/// Returns [`OperationError::InvariantViolation`] when a longer chain cannot
/// be closed — the surviving segments of a valid selection always pair up.
pub(crate) fn assemble_rings(segments: &[DirectedEdge]) -> Result<Vec<Contour>> {
    let n = segments.len();
    let mut used = vec![false; n];
    let mut rings = Vec::new();

    for first in 0..n {
        if used[first] {
            continue;
        }
        used[first] = true;
        let mut chain = vec![segments[first].0];
        let mut tail = segments[first].1;

        loop {
            if points_close(&tail, &chain[0]) {
                if chain.len() >= 3 {
                    rings.push(Contour::new(chain));
                }
                break;
            }

            let previous = chain[chain.len() - 1];
            let incoming = tail - previous;
            let mut best: Option<(usize, f64)> = None;
            for (i, (start, end)) in segments.iter().enumerate() {
                if used[i] || !points_close(start, &tail) {
                    continue;
                }
                let outgoing = end - start;
                let turn = incoming.x * outgoing.y - incoming.y * outgoing.x;
                let ahead = incoming.dot(&outgoing);
                // Signed turn angle in (−π, π]; a pure backtrack ranks below
                // every other candidate.
                let score = if points_close(end, &previous) {
                    f64::NEG_INFINITY
                } else {
                    turn.atan2(ahead)
                };
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((i, score));
                }
            }

            let Some((next, _)) = best else {
                if chain.len() < 3 {
                    break;
                }
                return Err(OperationError::InvariantViolation(format!(
                    "boundary chain starting at ({}, {}) cannot be closed",
                    chain[0].x, chain[0].y
                ))
                .into());
            };
            used[next] = true;
            chain.push(tail);
            tail = segments[next].1;
        }
    }

    Ok(rings)
}

/// Groups assembled rings into a polygon.
///
/// Rings are ordered by nesting depth (outermost first), then by area for
/// determinism, rotated to their canonical start vertex, and handed to the
/// orientation normalizer so winding matches nesting parity.
pub(crate) fn group_rings(rings: Vec<Contour>) -> Polygon {
    let kept: Vec<Contour> = rings.into_iter().filter(|r| !r.is_degenerate()).collect();

    let depths: Vec<usize> = kept
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            kept.iter()
                .enumerate()
                .filter(|(j, other)| *j != i && ring_contains_ring(other, ring))
                .count()
        })
        .collect();

    let mut order: Vec<usize> = (0..kept.len()).collect();
    order.sort_by(|&a, &b| {
        depths[a].cmp(&depths[b]).then_with(|| {
            kept[b]
                .signed_area()
                .abs()
                .total_cmp(&kept[a].signed_area().abs())
        })
    });

    let contours = order
        .into_iter()
        .map(|i| Contour::new(rotate_to_canonical_start(&kept[i].ring())))
        .collect();

    let mut polygon = Polygon::new(contours);
    orient_polygon_in_place(&mut polygon);
    polygon
}
