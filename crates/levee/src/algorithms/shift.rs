//! Horizontal translation of a whole cross-section.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Algorithm;
use crate::error::AlgorithmError;
use crate::section::CrossSection;

/// Move layers, head lines, ditch points and landmarks by `dx`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub dx: f64,
}

impl Algorithm for Shift {
    fn check_input(&self, _cs: &CrossSection) -> Result<(), AlgorithmError> {
        if !self.dx.is_finite() {
            return Err(AlgorithmError::input(format!(
                "shift distance must be finite, got {}",
                self.dx
            )));
        }
        Ok(())
    }

    fn apply(&self, cs: &CrossSection) -> Result<CrossSection, AlgorithmError> {
        let mut out = cs.clone();
        out.shift(self.dx)?;
        info!(dx = self.dx, "shifted cross-section");
        Ok(out)
    }
}
