use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::construct;
use super::select::BooleanOp;

/// Computes the symmetric difference of two polygons.
pub struct Xor<'a> {
    subject: &'a Polygon,
    clipping: &'a Polygon,
}

impl<'a> Xor<'a> {
    /// Creates a new `Xor` operation.
    #[must_use]
    pub fn new(subject: &'a Polygon, clipping: &'a Polygon) -> Self {
        Self { subject, clipping }
    }

    /// Executes the symmetric difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        construct(self.subject, self.clipping, BooleanOp::Xor)
    }
}
