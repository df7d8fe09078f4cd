use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Polygon};

use super::winding::{nesting_depth, ring_winding, Winding};

/// Normalizes ring winding in place: even nesting depth counter-clockwise,
/// odd depth clockwise.
///
/// Mutates the caller's ring point order — the one in-place mutation in the
/// public surface. Idempotent: reversal changes neither vertex sets nor
/// containment, so computed depths are stable across calls. Best-effort on
/// self-intersecting rings; degenerate rings are left untouched.
pub fn orient_polygon_in_place(polygon: &mut Polygon) {
    let depths: Vec<usize> = (0..polygon.contours.len())
        .map(|i| nesting_depth(polygon, i))
        .collect();

    for (contour, depth) in polygon.contours.iter_mut().zip(depths) {
        if contour.is_degenerate() {
            continue;
        }
        let want = if depth % 2 == 0 {
            Winding::Ccw
        } else {
            Winding::Cw
        };
        if ring_winding(contour) != want {
            contour.reverse();
        }
    }
}

/// Pure variant of [`orient_polygon_in_place`]: returns a normalized copy.
#[must_use]
pub fn oriented(polygon: &Polygon) -> Polygon {
    let mut out = polygon.clone();
    orient_polygon_in_place(&mut out);
    out
}

/// Normalizes ring winding for polygonal geometry, in place.
///
/// # Errors
///
/// Returns [`GeometryError::UnsupportedVariant`] for non-polygonal variants —
/// winding is meaningless for points and lines.
pub fn fix_orientation(geometry: &mut Geometry) -> Result<()> {
    match geometry {
        Geometry::Polygon(polygon) => {
            orient_polygon_in_place(polygon);
            Ok(())
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in &mut multi.polygons {
                orient_polygon_in_place(polygon);
            }
            Ok(())
        }
        other => Err(GeometryError::UnsupportedVariant {
            operation: "fix_orientation",
            variant: other.variant_name(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Contour, LineString};
    use crate::math::Point2;

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
    fn flips_rings_to_alternating_winding() {
        // Outer given clockwise, hole counter-clockwise: both must flip.
        let mut polygon = Polygon::new(vec![square(0.0, 0.0, 4.0).reversed(), square(1.0, 1.0, 2.0)]);
        orient_polygon_in_place(&mut polygon);
        assert_eq!(ring_winding(&polygon.contours[0]), Winding::Ccw);
        assert_eq!(ring_winding(&polygon.contours[1]), Winding::Cw);
    }

    #[test]
    fn winding_matches_depth_parity() {
        let mut polygon = Polygon::new(vec![
            square(0.0, 0.0, 8.0).reversed(),
            square(1.0, 1.0, 6.0),
            square(2.0, 2.0, 4.0).reversed(),
            square(3.0, 3.0, 2.0),
        ]);
        orient_polygon_in_place(&mut polygon);
        for i in 0..polygon.contours.len() {
            let want = if nesting_depth(&polygon, i) % 2 == 0 {
                Winding::Ccw
            } else {
                Winding::Cw
            };
            assert_eq!(ring_winding(&polygon.contours[i]), want, "ring {i}");
        }
    }

    #[test]
    fn idempotent() {
        let mut once = Polygon::new(vec![square(0.0, 0.0, 4.0).reversed(), square(1.0, 1.0, 2.0)]);
        orient_polygon_in_place(&mut once);
        let mut twice = once.clone();
        orient_polygon_in_place(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn oriented_leaves_input_untouched() {
        let polygon = Polygon::from_ring(square(0.0, 0.0, 2.0).reversed());
        let normalized = oriented(&polygon);
        assert_eq!(ring_winding(&polygon.contours[0]), Winding::Cw);
        assert_eq!(ring_winding(&normalized.contours[0]), Winding::Ccw);
    }

    #[test]
    fn degenerate_rings_survive_untouched() {
        let mut polygon = Polygon::new(vec![square(0.0, 0.0, 2.0), Contour::new(vec![p(5.0, 5.0)])]);
        orient_polygon_in_place(&mut polygon);
        assert_eq!(polygon.contours[1].points.len(), 1);
    }

    #[test]
    fn fix_orientation_dispatch() {
        let mut geometry = Geometry::Polygon(Polygon::from_ring(square(0.0, 0.0, 2.0).reversed()));
        assert!(fix_orientation(&mut geometry).is_ok());

        let mut line =
            Geometry::LineString(LineString::new(vec![p(0.0, 0.0), p(1.0, 0.0)]));
        assert!(fix_orientation(&mut line).is_err());
    }
}
