//! Snapping layer rings onto the rounding grid and onto each other's vertices.
//!
//! Layers are unioned edge-for-edge, so a new layer only joins the existing
//! ones when both carry the same vertices along their common boundary.

use super::types::{round_point, Point, Polyline};

/// Ring rounded to the 3-decimal grid, with repeated vertices dropped.
pub(crate) fn snap_ring(ring: &[Point]) -> Polyline {
    let mut out: Polyline = Vec::with_capacity(ring.len());
    for p in ring.iter().copied().map(round_point) {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Copy of the closed `ring` with every point of `at` inserted into the edge
/// it lies on.
///
/// A point lies on an edge when its distance to the edge is at most `tol` and
/// it is farther than `tol` from both endpoints. The closing edge counts.
pub(crate) fn split_ring_edges(ring: &[Point], at: &[Point], tol: f64) -> Polyline {
    let n = ring.len();
    let mut out: Polyline = Vec::with_capacity(n + at.len());
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        out.push(a);
        let mut inner: Vec<(f64, Point)> = at
            .iter()
            .filter_map(|&p| edge_param(a, b, p, tol).map(|t| (t, p)))
            .collect();
        inner.sort_by(|u, v| u.0.total_cmp(&v.0));
        inner.dedup_by(|u, v| u.1 == v.1);
        out.extend(inner.into_iter().map(|(_, p)| p));
    }
    out
}

/// Parameter of the foot of `p` on `a → b`, if `p` lies inside that edge.
fn edge_param(a: Point, b: Point, p: Point, tol: f64) -> Option<f64> {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 == 0.0 || (p - a).norm() <= tol || (p - b).norm() <= tol {
        return None;
    }
    let t = (p - a).dot(&d) / len2;
    if t <= 0.0 || t >= 1.0 || (p - (a + d * t)).norm() > tol {
        return None;
    }
    Some(t)
}
