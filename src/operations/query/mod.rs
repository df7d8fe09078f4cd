mod area;
mod bounding_box;
mod centroid;
mod length;

pub use area::{area, polygon_area};
pub use bounding_box::bounding_box;
pub use centroid::centroid;
pub use length::length;
