//! Curated API surface for callers (the `cli` crate, benches, demos).
//!
//! Prefer these re-exports over reaching into submodules.

// Geometry primitives
pub use crate::geom::{
    contains_rounded, interpolate_z, line_polyline_intersections, polyline_polyline_intersections,
    round3, round_point, same_rounded, segment_intersection, Point, Polyline, ROUND_DECIMALS,
};
// Surface extraction
pub use crate::profile::{closest_point, extract as extract_profile, points_between, Profile};
// Cross-section model
pub use crate::section::rand::{draw_levee, LeveeCfg};
pub use crate::section::{
    CharacteristicPoint, CharacteristicPointType, CharacteristicPoints, CrossSection, HeadLine,
    Landmark, Layer, Lookup, MaterialLayout, Snapshot, Soil, PHREATIC_LINE_LABEL,
};
// Algorithms
pub use crate::algorithms::{
    Algorithm, Berm, BermParams, ControlPoints, PhreaticLine, PhreaticOffsets, Shift,
    DITCH_FILL_LABEL,
};
pub use crate::error::{AlgorithmError, GeometryError, ModelError};
