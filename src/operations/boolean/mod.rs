mod assemble;
mod classify;
mod clip;
mod difference;
mod engine;
mod intersect_op;
mod select;
mod split;
mod union;
mod xor;

pub use classify::{classify_segment, BoundarySide, SegmentClass};
pub use clip::{clip, clip_multi};
pub use difference::Difference;
pub use engine::construct;
pub use intersect_op::Intersection;
pub use select::{should_keep_segment, BooleanOp, KeepDecision};
pub use split::{decompose, split_at_crossings, BoundarySegment, PolygonSource};
pub use union::Union;
pub use xor::Xor;
