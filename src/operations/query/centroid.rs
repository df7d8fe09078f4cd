use crate::geometry::{Contour, Geometry, LineString};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};

/// Centroid of a geometry.
///
/// Polygonal variants combine per-ring centroids weighted by signed ring
/// area, so hole rings (negative after normalization) subtract; lines use
/// length-weighted segment midpoints. Returns `None` for empty geometry, and
/// falls back to the line rule when a polygon's rings are all degenerate.
#[must_use]
pub fn centroid(geometry: &Geometry) -> Option<Point2> {
    match geometry {
        Geometry::Point(p) => Some(*p),
        Geometry::LineString(line) => lines_centroid(std::slice::from_ref(line)),
        Geometry::MultiLineString(multi) => lines_centroid(&multi.lines),
        Geometry::Polygon(polygon) => rings_centroid(&polygon.contours),
        Geometry::MultiPolygon(multi) => {
            let contours: Vec<Contour> = multi
                .polygons
                .iter()
                .flat_map(|p| p.contours.iter().cloned())
                .collect();
            rings_centroid(&contours)
        }
    }
}

/// Area-weighted combination of per-ring centroids.
fn rings_centroid(contours: &[Contour]) -> Option<Point2> {
    let mut weighted_x = 0.0;
    let mut weighted_y = 0.0;
    let mut total_area = 0.0;

    for contour in contours {
        let Some((center, ring_area)) = ring_centroid(&contour.ring()) else {
            continue;
        };
        weighted_x += center.x * ring_area;
        weighted_y += center.y * ring_area;
        total_area += ring_area;
    }

    if total_area.abs() > TOLERANCE {
        return Some(Point2::new(weighted_x / total_area, weighted_y / total_area));
    }
    // All rings degenerate: treat their outlines as open chains.
    let lines: Vec<LineString> = contours
        .iter()
        .map(|c| LineString::new(c.points.clone()))
        .collect();
    lines_centroid(&lines)
}

/// Centroid and signed area of one ring (standard shoelace weighting).
fn ring_centroid(ring: &[Point2]) -> Option<(Point2, f64)> {
    let ring_area = signed_area_2d(ring);
    if ring_area.abs() < TOLERANCE {
        return None;
    }

    let n = ring.len();
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let w = ring[i].x * ring[j].y - ring[j].x * ring[i].y;
        cx += (ring[i].x + ring[j].x) * w;
        cy += (ring[i].y + ring[j].y) * w;
    }
    let scale = 1.0 / (6.0 * ring_area);
    Some((Point2::new(cx * scale, cy * scale), ring_area))
}

/// Length-weighted combination of segment midpoints; degenerates to the
/// plain vertex mean for zero-length input.
fn lines_centroid(lines: &[LineString]) -> Option<Point2> {
    let mut weighted_x = 0.0;
    let mut weighted_y = 0.0;
    let mut total_len = 0.0;

    for line in lines {
        for w in line.points.windows(2) {
            let len = (w[1] - w[0]).norm();
            weighted_x += (w[0].x + w[1].x) * 0.5 * len;
            weighted_y += (w[0].y + w[1].y) * 0.5 * len;
            total_len += len;
        }
    }

    if total_len > TOLERANCE {
        return Some(Point2::new(weighted_x / total_len, weighted_y / total_len));
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0usize;
    for line in lines {
        for p in &line.points {
            sum_x += p.x;
            sum_y += p.y;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv = 1.0 / count as f64;
    Some(Point2::new(sum_x * inv, sum_y * inv))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{MultiPolygon, Polygon};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Contour {
        Contour::new(vec![
            p(x0, y0),
            p(x0 + size, y0),
            p(x0 + size, y0 + size),
            p(x0, y0 + size),
        ])
    }

    #[test]
    fn square_centroid_is_its_center() {
        let c = centroid(&Geometry::Polygon(Polygon::from_ring(square(0.0, 0.0, 2.0)))).unwrap();
        assert!((c.x - 1.0).abs() < 1e-12, "{c:?}");
        assert!((c.y - 1.0).abs() < 1e-12, "{c:?}");
    }

    #[test]
    fn off_center_hole_shifts_the_centroid() {
        // 4x4 square with a 1x1 hole near the right edge: the centroid moves
        // left of the center. Exact value from the area-weighted formula:
        // (16*2 − 1*3) / 15.
        let polygon = Polygon::new(vec![square(0.0, 0.0, 4.0), square(2.5, 1.5, 1.0).reversed()]);
        let c = centroid(&Geometry::Polygon(polygon)).unwrap();
        assert!((c.x - 29.0 / 15.0).abs() < 1e-12, "{c:?}");
        assert!((c.y - 2.0).abs() < 1e-12, "{c:?}");
    }

    #[test]
    fn multipolygon_weighs_by_area() {
        // Unit square at origin and a 2x2 square centered at (5, 0.5):
        // centroid x = (1*0.5 + 4*5) / 5 = 4.1.
        let multi = MultiPolygon::new(vec![
            Polygon::from_ring(square(0.0, 0.0, 1.0)),
            Polygon::from_ring(square(4.0, -0.5, 2.0)),
        ]);
        let c = centroid(&Geometry::MultiPolygon(multi)).unwrap();
        assert!((c.x - 4.1).abs() < 1e-12, "{c:?}");
        assert!((c.y - 0.5).abs() < 1e-12, "{c:?}");
    }

    #[test]
    fn line_centroid_is_length_weighted() {
        // Two edges of lengths 2 and 1 along the axes.
        let line = LineString::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0)]);
        let c = centroid(&Geometry::LineString(line)).unwrap();
        assert!((c.x - 4.0 / 3.0).abs() < 1e-12, "{c:?}");
        assert!((c.y - 1.0 / 6.0).abs() < 1e-12, "{c:?}");
    }

    #[test]
    fn point_centroid_is_itself() {
        let c = centroid(&Geometry::Point(p(3.0, 4.0))).unwrap();
        assert!((c.x - 3.0).abs() < 1e-12);
        assert!((c.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_geometry_has_no_centroid() {
        assert!(centroid(&Geometry::Polygon(Polygon::default())).is_none());
        assert!(centroid(&Geometry::LineString(LineString::new(vec![]))).is_none());
    }
}
