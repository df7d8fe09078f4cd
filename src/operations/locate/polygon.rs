use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Polygon};
use crate::math::Point2;
use crate::operations::orient::{ring_winding, Winding};

use super::ring::{locate_in_ring, RingLocation};

/// Classifies a point against a polygon with holes.
///
/// Every ring that contains the point by the ray test contributes +1 when
/// wound counter-clockwise and −1 when clockwise; the point is inside iff the
/// net sum is positive. Holes subtract containment without a persisted ring
/// hierarchy. Boundary contact with any ring wins outright.
#[must_use]
pub fn locate_in_polygon(point: &Point2, polygon: &Polygon) -> RingLocation {
    let mut sum = 0i64;
    for contour in &polygon.contours {
        match locate_in_ring(point, contour) {
            RingLocation::OnBoundary => return RingLocation::OnBoundary,
            RingLocation::Inside => {
                sum += match ring_winding(contour) {
                    Winding::Ccw => 1,
                    Winding::Cw => -1,
                };
            }
            RingLocation::Outside => {}
        }
    }

    if sum > 0 {
        RingLocation::Inside
    } else {
        RingLocation::Outside
    }
}

/// Returns true iff the point classifies strictly inside the polygon.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &Polygon) -> bool {
    locate_in_polygon(point, polygon) == RingLocation::Inside
}

/// Tests whether `inner` lies within `outer`.
///
/// Every vertex of `inner` (each ring vertex for polygonal variants) must
/// classify strictly inside `outer`; boundary contact does not count. When
/// `outer` is a multi-polygon its point set is the union of its members.
/// Empty `inner` geometry is never within anything.
///
/// # Errors
///
/// Returns [`GeometryError::UnsupportedVariant`] when `outer` is not a
/// polygon or multi-polygon.
pub fn within(inner: &Geometry, outer: &Geometry) -> Result<bool> {
    let vertices = inner_vertices(inner);
    if vertices.is_empty() {
        return Ok(false);
    }

    for vertex in &vertices {
        let contained = match outer {
            Geometry::Polygon(polygon) => point_in_polygon(vertex, polygon),
            Geometry::MultiPolygon(multi) => {
                multi.polygons.iter().any(|p| point_in_polygon(vertex, p))
            }
            other => {
                return Err(GeometryError::UnsupportedVariant {
                    operation: "within",
                    variant: other.variant_name(),
                }
                .into())
            }
        };
        if !contained {
            return Ok(false);
        }
    }
    Ok(true)
}

fn inner_vertices(geometry: &Geometry) -> Vec<Point2> {
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
