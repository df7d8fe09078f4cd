use super::contour::Contour;

/// A polygon as an ordered sequence of rings.
///
/// Ring 0 is conventionally the outer boundary; subsequent rings are holes or
/// nested islands. After normalization (see [`crate::operations::orient`])
/// winding alternates with nesting parity: rings at even nesting depth run
/// counter-clockwise, rings at odd depth clockwise. Nesting depth is computed
/// on demand; no ring hierarchy is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub contours: Vec<Contour>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    #[must_use]
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Creates a polygon with a single outer ring.
    #[must_use]
    pub fn from_ring(contour: Contour) -> Self {
        Self {
            contours: vec![contour],
        }
    }

    /// True when no ring carries area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(Contour::is_degenerate)
    }
}

/// An ordered sequence of independent polygons.
///
/// Metrics assume sibling polygons do not overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a multi-polygon from member polygons.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}
