mod normalize;
mod winding;

pub use normalize::{fix_orientation, orient_polygon_in_place, oriented};
pub use winding::{nesting_depth, ring_winding, Winding};

pub(crate) use winding::ring_contains_ring;
