//! Boundary and surface extraction from soil-layer polygons.
//!
//! Purpose
//! - Merge all layer polygons into the outer boundary of the cross-section and
//!   derive the ground surface: the part of the boundary visible from above.
//!
//! Model
//! 1. Union the layers (`geo::BooleanOps`), orient the exterior clockwise and
//!    drop the closing vertex; coordinates are rounded to 3 decimals.
//! 2. Rotate the ring to start at the topmost of the leftmost points.
//! 3. The surface is the prefix ending at the topmost of the rightmost points.
//!
//! Picking the topmost point among x-ties keeps vertical side walls at the
//! model edges out of the surface.

use geo::orient::{Direction, Orient};
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use crate::error::GeometryError;
use crate::geom::{round_point, Point, Polyline};

/// Derived outer geometry of a cross-section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    /// Clockwise outer ring starting at the top-left corner (not closed).
    pub boundary: Polyline,
    /// Boundary prefix from the top-left to the top-right corner.
    pub surface: Polyline,
}

/// Extract boundary and surface from a set of closed polygons.
pub fn extract<'a, I>(polygons: I) -> Result<Profile, GeometryError>
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let mut merged = MultiPolygon::<f64>::new(Vec::new());
    let mut count = 0usize;
    for ring in polygons {
        if ring.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "layer polygon with {} points",
                ring.len()
            )));
        }
        let exterior: LineString<f64> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        let poly = MultiPolygon::new(vec![Polygon::new(exterior, vec![])]);
        merged = merged.union(&poly);
        count += 1;
    }
    if count == 0 {
        return Err(GeometryError::Empty);
    }
    if merged.0.len() != 1 {
        return Err(GeometryError::Disconnected {
            parts: merged.0.len(),
        });
    }
    let outer = merged.0[0].orient(Direction::Reversed);
    let mut ring: Vec<Point> = outer
        .exterior()
        .coords()
        .map(|c| round_point(Point::new(c.x, c.y)))
        .collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(GeometryError::Degenerate(format!(
            "boundary with {} vertices",
            ring.len()
        )));
    }
    Ok(from_boundary(ring))
}

/// Rotate a clockwise ring to the top-left corner and cut the surface prefix.
fn from_boundary(mut ring: Vec<Point>) -> Profile {
    let idx_left = topmost_at_extreme(&ring, |a, b| a < b);
    ring.rotate_left(idx_left);
    let idx_right = topmost_at_extreme(&ring, |a, b| a > b);
    let surface = ring[..=idx_right].to_vec();
    Profile {
        boundary: ring,
        surface,
    }
}

/// Index of the highest point among those with the extreme x (first on ties).
fn topmost_at_extreme(ring: &[Point], beyond: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0usize;
    for (i, p) in ring.iter().enumerate().skip(1) {
        let b = ring[best];
        if beyond(p.x, b.x) || (p.x == b.x && p.y > b.y) {
            best = i;
        }
    }
    best
}

/// Surface points with `left <= x <= right`, in surface order.
pub fn points_between(surface: &[Point], left: f64, right: f64) -> Vec<Point> {
    surface
        .iter()
        .copied()
        .filter(|p| p.x >= left && p.x <= right)
        .collect()
}

/// Surface points with `left < x < right`, in surface order.
pub fn points_strictly_between(surface: &[Point], left: f64, right: f64) -> Vec<Point> {
    surface
        .iter()
        .copied()
        .filter(|p| p.x > left && p.x < right)
        .collect()
}

/// Surface vertex closest in x to `x` (first on ties).
pub fn closest_point(surface: &[Point], x: f64) -> Option<Point> {
    surface.iter().copied().reduce(|best, p| {
        if (p.x - x).abs() < (best.x - x).abs() {
            p
        } else {
            best
        }
    })
}
