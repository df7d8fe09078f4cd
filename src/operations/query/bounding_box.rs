use crate::geometry::{Bounds, Geometry, Polygon};
use crate::math::Point2;

/// Axis-aligned bounds over every vertex of a geometry.
///
/// Returns `None` for empty geometry.
#[must_use]
pub fn bounding_box(geometry: &Geometry) -> Option<Bounds> {
    Bounds::from_points(vertices(geometry))
}

fn vertices(geometry: &Geometry) -> Vec<Point2> {
    match geometry {
        Geometry::Point(p) => vec![*p],
        Geometry::LineString(line) => line.points.clone(),
        Geometry::MultiLineString(multi) => multi
            .lines
            .iter()
            .flat_map(|line| line.points.iter().copied())
            .collect(),
        Geometry::Polygon(polygon) => polygon_vertices(polygon),
        Geometry::MultiPolygon(multi) => {
            multi.polygons.iter().flat_map(polygon_vertices).collect()
        }
    }
}

fn polygon_vertices(polygon: &Polygon) -> Vec<Point2> {
    polygon
        .contours
        .iter()
        .flat_map(|contour| contour.points.iter().copied())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Contour, LineString};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn polygon_bounds_cover_all_rings() {
        let polygon = Geometry::Polygon(Polygon::new(vec![
            Contour::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]),
            Contour::new(vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)]),
        ]));
        let b = bounding_box(&polygon).unwrap();
        assert!(b.min.x.abs() < TOLERANCE && (b.max.x - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_bounds_are_the_point() {
        let b = bounding_box(&Geometry::Point(p(2.0, 3.0))).unwrap();
        assert!((b.min.x - 2.0).abs() < TOLERANCE);
        assert!((b.max.y - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn empty_geometry_has_no_bounds() {
        let empty = Geometry::LineString(LineString::new(vec![]));
        assert!(bounding_box(&empty).is_none());
    }
}
