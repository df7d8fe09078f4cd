use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::construct;
use super::select::BooleanOp;

/// Computes the boolean intersection of two polygons.
pub struct Intersection<'a> {
    subject: &'a Polygon,
    clipping: &'a Polygon,
}

impl<'a> Intersection<'a> {
    /// Creates a new `Intersection` operation.
    #[must_use]
    pub fn new(subject: &'a Polygon, clipping: &'a Polygon) -> Self {
        Self { subject, clipping }
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        construct(self.subject, self.clipping, BooleanOp::Intersection)
    }
}
