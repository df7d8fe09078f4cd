use crate::geometry::{LineString, MultiLineString, Polygon};
use crate::math::{points_close, Point2};
use crate::operations::locate::{locate_in_polygon, RingLocation};
use crate::operations::orient::oriented;

use super::split::{decompose, split_chain_at_boundary, PolygonSource};

/// Clips a line against a polygon, keeping the parts inside it.
///
/// The line's edges are split at every boundary crossing and each piece is
/// classified by its midpoint: pieces inside the polygon or running along its
/// boundary survive (the orientation-weighted containment sum excludes holes
/// from "inside"). Consecutive survivors chain into open runs; a run is
/// flushed wherever a piece is dropped, so chain endpoints land exactly on
/// the boundary crossings.
#[must_use]
pub fn clip(line: &LineString, polygon: &Polygon) -> MultiLineString {
    // Containment weights rings by winding, so work on a normalized copy.
    let polygon = oriented(polygon);
    let boundary = decompose(&polygon, PolygonSource::Clipping);
    let pieces = split_chain_at_boundary(&line.points, &boundary);

    let mut lines = Vec::new();
    let mut run: Vec<Point2> = Vec::new();
    for (start, end) in pieces {
        let mid = Point2::new((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
        if locate_in_polygon(&mid, &polygon) == RingLocation::Outside {
            flush(&mut run, &mut lines);
            continue;
        }
        let connected = run.last().is_some_and(|last| points_close(last, &start));
        if !connected {
            flush(&mut run, &mut lines);
            run.push(start);
        }
        run.push(end);
    }
    flush(&mut run, &mut lines);

    MultiLineString::new(lines)
}

/// Clips every member line of a multi-line string.
#[must_use]
pub fn clip_multi(lines: &MultiLineString, polygon: &Polygon) -> MultiLineString {
    MultiLineString::new(
        lines
            .lines
            .iter()
            .flat_map(|line| clip(line, polygon).lines)
            .collect(),
    )
}

fn flush(run: &mut Vec<Point2>, lines: &mut Vec<LineString>) {
    if run.len() >= 2 {
        lines.push(LineString::new(std::mem::take(run)));
    } else {
        run.clear();
    }
}
