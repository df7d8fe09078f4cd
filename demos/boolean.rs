//! Walkthrough of the boolean engine: two overlapping squares through all
//! four set operations, then a line clipped against an annulus.
//!
//! Run with `cargo run --example boolean`; set `RUST_LOG=debug` for more
//! detail.

use planigon::geometry::{Contour, Geometry, LineString, Polygon};
use planigon::math::Point2;
use planigon::operations::boolean::{clip, construct, BooleanOp};
use planigon::operations::query::{area, centroid, length};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> planigon::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let subject = square(0.0, 0.0, 2.0);
    let clipping = square(-1.0, -1.0, 2.0);

    for op in [
        BooleanOp::Union,
        BooleanOp::Intersection,
        BooleanOp::Difference,
        BooleanOp::Xor,
    ] {
        let result = construct(&subject, &clipping, op)?;
        let geometry = Geometry::Polygon(result);
        info!(
            ?op,
            area = area(&geometry),
            perimeter = length(&geometry),
            centroid = ?centroid(&geometry),
            "constructed"
        );
    }

    let annulus = Polygon::new(vec![
        square(0.0, 0.0, 6.0).contours[0].clone(),
        square(2.0, 2.0, 2.0).contours[0].reversed(),
    ]);
    let line = LineString::new(vec![Point2::new(-1.0, 3.0), Point2::new(7.0, 3.0)]);
    let clipped = clip(&line, &annulus);
    info!(chains = clipped.lines.len(), "clipped a line against the annulus");

    Ok(())
}

fn square(x0: f64, y0: f64, size: f64) -> Polygon {
    Polygon::from_ring(Contour::new(vec![
        Point2::new(x0, y0),
        Point2::new(x0 + size, y0),
        Point2::new(x0 + size, y0 + size),
        Point2::new(x0, y0 + size),
    ]))
}
