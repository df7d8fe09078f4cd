use super::{Point2, TOLERANCE};

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Turn direction at `b` along the path `a → b → c`: the 2D cross product of
/// the incoming and outgoing edges. Positive for a left (counter-clockwise)
/// turn, negative for a right turn, near zero for collinear points.
#[must_use]
pub fn turn_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Index of the bottommost vertex, rightmost on ties.
///
/// For a simple ring this corner is convex, so the turn direction there gives
/// the ring's winding.
#[must_use]
pub fn bottom_right_index(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y < b.y - TOLERANCE || ((pt.y - b.y).abs() < TOLERANCE && pt.x > b.x) {
            best = i;
        }
    }
    best
}

/// Rotates a closed ring so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn turn_left_positive() {
        let t = turn_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0));
        assert!(t > 0.0, "t={t}");
    }

    #[test]
    fn turn_right_negative() {
        let t = turn_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0));
        assert!(t < 0.0, "t={t}");
    }

    #[test]
    fn turn_collinear_zero() {
        let t = turn_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0));
        assert!(t.abs() < TOLERANCE, "t={t}");
    }

    #[test]
    fn bottom_right_prefers_lowest_then_rightmost() {
        let pts = vec![p(0.0, 1.0), p(1.0, 0.0), p(3.0, 0.0), p(2.0, 2.0)];
        assert_eq!(bottom_right_index(&pts), 2);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert!(rotated[0].x.abs() < TOLERANCE);
        assert!(rotated[0].y.abs() < TOLERANCE);
        assert_eq!(rotated.len(), 4);
    }
}
