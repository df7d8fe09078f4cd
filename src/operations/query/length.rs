use crate::geometry::{Geometry, Polygon};
use crate::math::Point2;

/// Total Euclidean edge length of a geometry.
///
/// Ring edges close the loop, so polygon length is the perimeter of every
/// ring including holes. Points have zero length.
#[must_use]
pub fn length(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::Point(_) => 0.0,
        Geometry::LineString(line) => open_length(&line.points),
        Geometry::MultiLineString(multi) => {
            multi.lines.iter().map(|line| open_length(&line.points)).sum()
        }
        Geometry::Polygon(polygon) => polygon_perimeter(polygon),
        Geometry::MultiPolygon(multi) => multi.polygons.iter().map(polygon_perimeter).sum(),
    }
}

fn open_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

fn polygon_perimeter(polygon: &Polygon) -> f64 {
    polygon
        .contours
        .iter()
        .map(|contour| {
            let ring = contour.ring();
            let n = ring.len();
            if n < 2 {
                return 0.0;
            }
            (0..n).map(|i| (ring[(i + 1) % n] - ring[i]).norm()).sum()
        })
        .sum()
}
