use crate::math::{Point2, TOLERANCE};

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Computes the bounds of a point set; `None` when it is empty.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.expand(&p);
        }
        Some(bounds)
    }

    /// Grows the bounds to cover `p`.
    pub fn expand(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Tolerance-padded overlap test, used for cheap rejection.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x + TOLERANCE
            && self.max.x >= other.min.x - TOLERANCE
            && self.min.y <= other.max.y + TOLERANCE
            && self.max.y >= other.min.y - TOLERANCE
    }

    /// Tolerance-padded point containment.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x - TOLERANCE
            && p.x <= self.max.x + TOLERANCE
            && p.y >= self.min.y - TOLERANCE
            && p.y <= self.max.y + TOLERANCE
    }
}
