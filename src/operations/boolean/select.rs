use super::classify::{BoundarySide, SegmentClass};
use super::split::PolygonSource;

/// The type of boolean set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
    Xor,
}

/// Decision about whether a classified segment survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    KeepReversed,
    Discard,
}

/// Determines whether a boundary segment survives the requested operation,
/// given its classification against the other polygon.
///
/// | segment  | vs other polygon   | Union   | Intersection | Difference (A−B) | Xor         |
/// |----------|--------------------|---------|--------------|------------------|-------------|
/// | from A   | outside            | keep    | discard      | keep             | keep        |
/// | from A   | inside             | discard | keep         | discard          | keep (flip) |
/// | from A   | boundary, same dir | keep    | keep         | discard          | discard     |
/// | from A   | boundary, opposite | discard | discard      | keep             | discard     |
/// | from B   | outside            | keep    | discard      | discard          | keep        |
/// | from B   | inside             | discard | keep         | keep (flip)      | keep (flip) |
/// | from B   | boundary (any)     | discard | discard      | discard          | discard     |
///
/// Coincident boundary segments survive exactly once, always from the
/// subject side. Xor is the union of the Difference(A,B) and Difference(B,A)
/// segment sets, except that coincident boundaries are dropped from both so
/// results that touch along an edge merge instead of leaving unmatched
/// half-edges.
#[must_use]
pub fn should_keep_segment(
    source: PolygonSource,
    class: SegmentClass,
    op: BooleanOp,
) -> KeepDecision {
    use BooleanOp::{Difference, Intersection, Union, Xor};
    use PolygonSource::{Clipping, Subject};

    match (source, class, op) {
        // Subject segments, classified against the clipping polygon.
        (Subject, SegmentClass::Outside, Union | Difference | Xor) => KeepDecision::Keep,
        (Subject, SegmentClass::Outside, Intersection) => KeepDecision::Discard,
        (Subject, SegmentClass::Inside, Intersection) => KeepDecision::Keep,
        (Subject, SegmentClass::Inside, Xor) => KeepDecision::KeepReversed,
        (Subject, SegmentClass::Inside, Union | Difference) => KeepDecision::Discard,
        (Subject, SegmentClass::Boundary(BoundarySide::Same), Union | Intersection) => {
            KeepDecision::Keep
        }
        (Subject, SegmentClass::Boundary(BoundarySide::Same), Difference | Xor) => {
            KeepDecision::Discard
        }
        (Subject, SegmentClass::Boundary(BoundarySide::Opposite), Difference) => {
            KeepDecision::Keep
        }
        (Subject, SegmentClass::Boundary(BoundarySide::Opposite), Union | Intersection | Xor) => {
            KeepDecision::Discard
        }

        // Clipping segments, classified against the subject polygon.
        (Clipping, SegmentClass::Outside, Union | Xor) => KeepDecision::Keep,
        (Clipping, SegmentClass::Outside, Intersection | Difference) => KeepDecision::Discard,
        (Clipping, SegmentClass::Inside, Intersection) => KeepDecision::Keep,
        (Clipping, SegmentClass::Inside, Difference | Xor) => KeepDecision::KeepReversed,
        (Clipping, SegmentClass::Inside, Union) => KeepDecision::Discard,
        (Clipping, SegmentClass::Boundary(_), _) => KeepDecision::Discard,
    }
}
