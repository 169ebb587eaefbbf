//! Point and polyline conventions plus small scalar helpers.
//!
//! - Points are `Vector2<f64>` with `x` the horizontal offset and `y` the
//!   elevation (called `z` throughout the domain docs).
//! - Polylines are plain slices; traversal order is meaningful.

use nalgebra::Vector2;

use super::cfg::ROUND_DECIMALS;

/// A cross-section point `(x, z)`; the `y` component holds `z`.
pub type Point = Vector2<f64>;

/// Ordered sequence of points (≥ 2 for a meaningful polyline).
pub type Polyline = Vec<Point>;

/// Round to `ROUND_DECIMALS` decimals.
#[inline]
pub fn round3(v: f64) -> f64 {
    let f = 10f64.powi(ROUND_DECIMALS);
    (v * f).round() / f
}

/// Round both coordinates of a point.
#[inline]
pub fn round_point(p: Point) -> Point {
    Point::new(round3(p.x), round3(p.y))
}

/// Equality after rounding both points to `ROUND_DECIMALS`.
#[inline]
pub fn same_rounded(a: Point, b: Point) -> bool {
    round_point(a) == round_point(b)
}

/// Is `p` (rounded) already in `pts`? `pts` are compared as given.
pub fn contains_rounded(pts: &[Point], p: Point) -> bool {
    let r = round_point(p);
    pts.iter().any(|q| *q == r)
}

/// Linear interpolation of z on the segment `a → b` at `x`.
///
/// Pre: `a.x != b.x`. Extrapolates outside `[a.x, b.x]`.
#[inline]
pub fn interpolate_z(a: Point, b: Point, x: f64) -> f64 {
    a.y + (x - a.x) / (b.x - a.x) * (b.y - a.y)
}

/// Signed cross product `a × b` of two 2D vectors.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
