use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::construct;
use super::select::BooleanOp;

/// Computes the boolean union of two polygons.
pub struct Union<'a> {
    subject: &'a Polygon,
    clipping: &'a Polygon,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(subject: &'a Polygon, clipping: &'a Polygon) -> Self {
        Self { subject, clipping }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        construct(self.subject, self.clipping, BooleanOp::Union)
    }
}
