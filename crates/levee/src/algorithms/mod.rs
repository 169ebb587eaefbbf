//! Construction algorithms over a `CrossSection`.
//!
//! Purpose
//! - Derive new geometry (phreatic line, berm layers, horizontal shift) from a
//!   cross-section snapshot and return it as a new cross-section.
//!
//! Why this design
//! - One trait with a provided `execute`: every algorithm validates its inputs
//!   first (`check_input`, `AlgorithmError::Input`) and only then computes
//!   (`apply`). Implementations never touch the caller's value.
//!
//! Conventions
//! - Landmarks are read through `landmark`, which turns an absent or NaN
//!   characteristic point into an `Input` error naming it.

mod berm;
mod phreatic;
mod shift;

pub use berm::{Berm, BermParams, DITCH_FILL_LABEL};
pub use phreatic::{ControlPoints, PhreaticLine, PhreaticOffsets};
pub use shift::Shift;

use crate::error::AlgorithmError;
use crate::section::{CharacteristicPointType, CrossSection, Landmark};

/// A validated transformation `CrossSection -> CrossSection`.
pub trait Algorithm {
    /// Validate preconditions without computing anything.
    fn check_input(&self, cs: &CrossSection) -> Result<(), AlgorithmError>;

    /// Compute the result; assumes `check_input` passed.
    fn apply(&self, cs: &CrossSection) -> Result<CrossSection, AlgorithmError>;

    /// `check_input` followed by `apply`.
    fn execute(&self, cs: &CrossSection) -> Result<CrossSection, AlgorithmError> {
        self.check_input(cs)?;
        self.apply(cs)
    }
}

/// Usable x of a landmark, or an `Input` error naming it.
pub(crate) fn landmark(
    cs: &CrossSection,
    point_type: CharacteristicPointType,
) -> Result<f64, AlgorithmError> {
    cs.characteristic_points()
        .landmark_x(point_type)
        .map_err(|why| match why {
            Landmark::Absent => AlgorithmError::input(format!("missing {point_type} point")),
            Landmark::Invalid => {
                AlgorithmError::input(format!("invalid {point_type} point (x is not a number)"))
            }
        })
}

/// Ground level at `x`, or an `Execution` error.
pub(crate) fn surface_z(cs: &CrossSection, x: f64) -> Result<f64, AlgorithmError> {
    cs.surface_z_at(x)
        .ok_or_else(|| AlgorithmError::execution(format!("no surface at x = {x:.3}")))
}
