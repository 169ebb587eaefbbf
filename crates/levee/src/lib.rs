//! Levee cross-section geometry.
//!
//! Derives the ground surface of a layered 2D levee model and constructs new
//! geometry on it: phreatic lines, stability berms with ditch fill, and
//! horizontal shifts.
//!
//! Layout
//! - `geom`: points, polylines and intersection primitives.
//! - `profile`: boundary and surface extraction from layer polygons.
//! - `section`: the `CrossSection` model with its landmark registry.
//! - `algorithms`: validated transformations returning a new cross-section.
//!
//! API Policy
//! - The core performs no I/O; file handling lives in the `cli` crate.
//! - Algorithms never modify their input; they return a modified copy.

pub mod algorithms;
pub mod api;
pub mod error;
pub mod geom;
pub mod profile;
pub mod section;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithms::Algorithm;
pub use error::{AlgorithmError, GeometryError, ModelError};
pub use geom::{Point, Polyline};
pub use section::CrossSection;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithms::{
        Algorithm, Berm, BermParams, PhreaticLine, PhreaticOffsets, Shift,
    };
    pub use crate::error::{AlgorithmError, GeometryError, ModelError};
    pub use crate::geom::{Point, Polyline};
    pub use crate::section::{
        CharacteristicPointType, CrossSection, Layer, MaterialLayout, Snapshot, Soil,
    };
    pub use nalgebra::Vector2 as Vec2;
}
