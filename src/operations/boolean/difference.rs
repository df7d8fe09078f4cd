use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::construct;
use super::select::BooleanOp;

/// Computes the boolean difference of two polygons (subject minus clipping).
pub struct Difference<'a> {
    subject: &'a Polygon,
    clipping: &'a Polygon,
}

impl<'a> Difference<'a> {
    /// Creates a new `Difference` operation.
    #[must_use]
    pub fn new(subject: &'a Polygon, clipping: &'a Polygon) -> Self {
        Self { subject, clipping }
    }

    /// Executes the difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        construct(self.subject, self.clipping, BooleanOp::Difference)
    }
}
