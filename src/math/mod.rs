pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative-tolerance scalar comparison.
///
/// The accepted error grows with the magnitude of the operands, with
/// `TOLERANCE` as the absolute floor near zero.
#[must_use]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Tolerance-based point equality (componentwise relative comparison).
#[must_use]
pub fn points_close(a: &Point2, b: &Point2) -> bool {
    nearly_equal(a.x, b.x) && nearly_equal(a.y, b.y)
}

/// Distance tolerance around `p`: `TOLERANCE` scaled with the coordinate
/// magnitude so checks stay relative away from the origin.
#[must_use]
pub fn distance_tolerance(p: &Point2) -> f64 {
    TOLERANCE * p.x.abs().max(p.y.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_absolute_floor() {
        assert!(nearly_equal(0.0, 1e-12));
        assert!(!nearly_equal(0.0, 1e-9));
    }

    #[test]
    fn nearly_equal_scales_with_magnitude() {
        assert!(nearly_equal(1e6, 1e6 + 1e-5));
        assert!(!nearly_equal(1.0, 1.0 + 1e-5));
    }

    #[test]
    fn points_close_componentwise() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-12, 2.0 - 1e-12);
        assert!(points_close(&a, &b));
        assert!(!points_close(&a, &Point2::new(1.0, 2.1)));
    }
}
