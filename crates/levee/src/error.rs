//! Error types for surface extraction and the construction algorithms.
//!
//! Policy
//! - Preconditions are checked before any geometry is touched (`Input`).
//! - Geometric dead-ends name the step that failed (`Execution`).
//! - Nothing is retried or recovered silently; the caller's cross-section is
//!   never modified because every algorithm works on its own copy.

use thiserror::Error;

/// Failures while deriving the boundary and surface from the layer polygons.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The cross-section has no layers.
    #[error("cannot derive a boundary: the cross-section has no layers")]
    Empty,

    /// The union of the layers is not one connected region.
    #[error("layers do not form one connected region ({parts} parts)")]
    Disconnected { parts: usize },

    /// A polygon or the merged boundary has too few vertices.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the construction algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// A precondition was violated before computation started.
    #[error("input check failed: {0}")]
    Input(String),

    /// A geometric search failed mid-algorithm.
    #[error("execution failed: {0}")]
    Execution(String),

    /// The requested strategy is not implemented.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Recomputing the derived geometry of the result failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl AlgorithmError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub(crate) fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}

/// Errors raised by head-line edits on a cross-section.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid headline label '{0}' (not found)")]
    UnknownHeadLine(String),

    #[error("trying to set more coords ({given}) than currently in headline '{label}' ({available})")]
    TooManyCoordinates {
        label: String,
        given: usize,
        available: usize,
    },
}
