//! Segment, line and polyline intersections.
//!
//! Results keep traversal order and are never de-duplicated here: a shared
//! vertex of two consecutive edges is reported once per edge. Callers pick
//! their own tie-break policy (first hit, rightmost hit, rounded membership).

use super::cfg::{EPS_PARALLEL, EPS_PARAM};
use super::types::{cross, Point};

/// Intersection of the closed segments `[p1, p2]` and `[q1, q2]`.
///
/// Parallel and collinear-overlapping segments return `None`.
pub fn segment_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Option<Point> {
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = cross(r, s);
    if denom.abs() <= EPS_PARALLEL {
        return None;
    }
    let qp = q1 - p1;
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    let inside = |v: f64| (-EPS_PARAM..=1.0 + EPS_PARAM).contains(&v);
    if inside(t) && inside(u) {
        Some(p1 + r * t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Intersections of the segment `[p1, p2]` with every edge of `polyline`,
/// in the edge order of `polyline`.
pub fn line_polyline_intersections(p1: Point, p2: Point, polyline: &[Point]) -> Vec<Point> {
    polyline
        .windows(2)
        .filter_map(|e| segment_intersection(p1, p2, e[0], e[1]))
        .collect()
}

/// Intersections of every edge of `a` with every edge of `b`.
///
/// Ordered by `a`'s edges first, then by `b`'s edges within one edge of `a`.
pub fn polyline_polyline_intersections(a: &[Point], b: &[Point]) -> Vec<Point> {
    let mut out = Vec::new();
    for ea in a.windows(2) {
        out.extend(line_polyline_intersections(ea[0], ea[1], b));
    }
    out
}
