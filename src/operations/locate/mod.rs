mod polygon;
mod ring;

pub use polygon::{locate_in_polygon, point_in_polygon, within};
pub use ring::{locate_in_ring, RingLocation};
