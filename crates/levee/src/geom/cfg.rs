//! Tolerance defaults for cross-section geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants. The 3-decimal rounding matches the precision
//!   of the stored cross-section coordinates and must not drift, otherwise
//!   inserted layers stop lining up with the existing geometry.

/// Decimals kept when comparing or caching coordinates.
pub const ROUND_DECIMALS: i32 = 3;
/// Slack on the segment parameter `t ∈ [0, 1]` so endpoint hits are kept.
pub(crate) const EPS_PARAM: f64 = 1e-9;
/// Cross products below this are treated as parallel (no intersection).
pub(crate) const EPS_PARALLEL: f64 = 1e-12;
/// Distance kept between a clamped outfall point and the right model edge.
pub(crate) const F_EDGE_MARGIN: f64 = 0.01;
/// Distance within which an inserted vertex counts as lying on an existing edge.
pub(crate) const SNAP_TOL: f64 = 1e-3;
