use crate::geometry::{Contour, Geometry, Polygon};

/// Total area enclosed by a geometry.
///
/// Signed shoelace areas are summed per polygon, so hole rings (negative
/// after normalization) net out automatically; the absolute value is taken at
/// the polygon level and the siblings of a multi-polygon — assumed disjoint —
/// are summed. Points and lines enclose nothing.
#[must_use]
pub fn area(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::Point(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => 0.0,
        Geometry::Polygon(polygon) => polygon_area(polygon),
        Geometry::MultiPolygon(multi) => multi.polygons.iter().map(polygon_area).sum(),
    }
}

/// Net area of one polygon: the absolute value of its signed ring-area sum.
#[must_use]
pub fn polygon_area(polygon: &Polygon) -> f64 {
    polygon
        .contours
        .iter()
        .map(Contour::signed_area)
        .sum::<f64>()
        .abs()
}
