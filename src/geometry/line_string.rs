use crate::math::{points_close, Point2};

/// An open or closed sequence of vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    pub points: Vec<Point2>,
}

impl LineString {
    /// Creates a line string from a vertex sequence.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// True when the first and last vertices coincide within tolerance.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 2 && points_close(first, last),
            _ => false,
        }
    }
}

/// A collection of independent line strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a multi-line string from member lines.
    #[must_use]
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }
}
