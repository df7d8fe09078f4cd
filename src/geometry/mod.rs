pub mod bounds;
pub mod contour;
pub mod line_string;
pub mod polygon;

pub use bounds::Bounds;
pub use contour::Contour;
pub use line_string::{LineString, MultiLineString};
pub use polygon::{MultiPolygon, Polygon};

use crate::math::Point2;

/// A planar geometry value: the closed set of variants the kernel operates
/// on, matched exhaustively.
///
/// Operations invoked on a variant they do not handle return
/// [`GeometryError::UnsupportedVariant`](crate::error::GeometryError) instead
/// of asserting at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point2),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Variant name for error reporting.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::MultiLineString(_) => "MultiLineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

impl From<Point2> for Geometry {
    fn from(value: Point2) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}
