//! 2D geometry primitives for cross-sections.
//!
//! Purpose
//! - Pure, allocation-light intersection routines on `(x, z)` polylines used by
//!   the surface extractor and the construction algorithms.
//! - Centralize the rounding policy (3 decimals) used for membership tests and
//!   for snapping inserted layers onto the existing ones.
//!
//! Conventions
//! - Segment hits include endpoints (parameter slack `EPS_PARAM`).
//! - Collinear overlaps are "no intersection"; callers must not rely on them.
//! - Duplicates are kept; see `intersect` for the ordering contract.

pub mod cfg;
mod intersect;
mod snap;
mod types;

pub use cfg::ROUND_DECIMALS;
pub use intersect::{
    line_polyline_intersections, polyline_polyline_intersections, segment_intersection,
};
pub(crate) use snap::{snap_ring, split_ring_edges};
pub use types::{
    contains_rounded, interpolate_z, round3, round_point, same_rounded, Point, Polyline,
};

#[cfg(test)]
mod tests;
