use crate::error::Result;
use crate::geometry::{Bounds, Polygon};
use crate::operations::orient::{orient_polygon_in_place, oriented};

use super::assemble::{assemble_rings, dedup_segments, group_rings, DirectedEdge};
use super::classify::classify_segment;
use super::select::{should_keep_segment, BooleanOp, KeepDecision};
use super::split::{decompose, split_at_crossings, BoundarySegment, PolygonSource};

/// Executes a boolean set operation on two polygons.
///
/// Orchestrates the full pipeline: boundary decomposition, pairwise
/// intersection and splitting, midpoint classification, per-operation
/// selection, ring stitching, and winding normalization. The result may hold
/// several outermost rings (an XOR of overlapping operands, say); nesting
/// parity of the winding distinguishes outer rings from holes.
///
/// For simple (non-self-intersecting) operands the result areas satisfy the
/// standard inclusion–exclusion identities. Self-intersecting input produces
/// a geometrically plausible best-effort result, not an error.
///
/// # Errors
///
/// Returns [`OperationError::InvariantViolation`](crate::error::OperationError)
/// when surviving segments cannot be stitched into closed rings — a state a
/// valid selection over simple inputs never reaches.
pub fn construct(subject: &Polygon, clipping: &Polygon, op: BooleanOp) -> Result<Polygon> {
    // Step 1: trivial shortcuts when either operand carries no area.
    if let Some(result) = trivial_result(subject, clipping, op) {
        return Ok(result);
    }

    // Step 2: cheap rejection when the bounds cannot interact.
    if !bounds_overlap(subject, clipping) {
        return Ok(disjoint_result(subject, clipping, op));
    }

    // Classification weights rings by their winding, so both operands are
    // normalized up front; the caller's values are never mutated.
    let subject = oriented(subject);
    let clipping = oriented(clipping);

    // Step 3: decompose both boundaries into directed segments.
    let subject_segments = decompose(&subject, PolygonSource::Subject);
    let clipping_segments = decompose(&clipping, PolygonSource::Clipping);

    // Step 4: split every segment at every pairwise intersection.
    let (subject_split, clipping_split) =
        split_at_crossings(&subject_segments, &clipping_segments);

    // Step 5: classify midpoints against the other polygon and apply the
    // selection table.
    let mut survivors: Vec<DirectedEdge> = Vec::new();
    collect_survivors(&subject_split, &clipping, op, &mut survivors);
    collect_survivors(&clipping_split, &subject, op, &mut survivors);

    // Shared boundaries must survive exactly once.
    let survivors = dedup_segments(survivors);
    if survivors.is_empty() {
        return Ok(Polygon::default());
    }

    // Step 6: stitch rings, regroup by nesting, normalize winding.
    let rings = assemble_rings(&survivors)?;
    Ok(group_rings(rings))
}

fn collect_survivors(
    segments: &[BoundarySegment],
    other: &Polygon,
    op: BooleanOp,
    out: &mut Vec<DirectedEdge>,
) {
    for segment in segments {
        let class = classify_segment(segment, other);
        match should_keep_segment(segment.source, class, op) {
            KeepDecision::Keep => out.push((segment.start, segment.end)),
            KeepDecision::KeepReversed => out.push((segment.end, segment.start)),
            KeepDecision::Discard => {}
        }
    }
}

/// Shortcut results when either operand has no area-bearing ring.
fn trivial_result(subject: &Polygon, clipping: &Polygon, op: BooleanOp) -> Option<Polygon> {
    match (subject.is_empty(), clipping.is_empty()) {
        (false, false) => None,
        (true, true) => Some(Polygon::default()),
        (true, false) => Some(match op {
            BooleanOp::Union | BooleanOp::Xor => oriented(clipping),
            BooleanOp::Intersection | BooleanOp::Difference => Polygon::default(),
        }),
        (false, true) => Some(match op {
            BooleanOp::Union | BooleanOp::Difference | BooleanOp::Xor => oriented(subject),
            BooleanOp::Intersection => Polygon::default(),
        }),
    }
}

fn bounds_overlap(subject: &Polygon, clipping: &Polygon) -> bool {
    match (polygon_bounds(subject), polygon_bounds(clipping)) {
        (Some(a), Some(b)) => a.intersects(&b),
        _ => false,
    }
}

fn polygon_bounds(polygon: &Polygon) -> Option<Bounds> {
    Bounds::from_points(
        polygon
            .contours
            .iter()
            .flat_map(|contour| contour.points.iter().copied()),
    )
}

/// Results for operands whose bounds do not interact.
fn disjoint_result(subject: &Polygon, clipping: &Polygon, op: BooleanOp) -> Polygon {
    match op {
        BooleanOp::Union | BooleanOp::Xor => {
            let mut contours = subject.contours.clone();
            contours.extend(clipping.contours.iter().cloned());
            let mut merged = Polygon::new(contours);
            orient_polygon_in_place(&mut merged);
            merged
        }
        BooleanOp::Intersection => Polygon::default(),
        BooleanOp::Difference => oriented(subject),
    }
}
