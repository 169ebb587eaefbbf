//! Plain data types of the cross-section model.

use serde::{Deserialize, Serialize};

use super::charpoints::CharacteristicPoints;
use crate::geom::Polyline;

/// Soil catalogue entry; the core only consults `code`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Soil {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Soil {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
        }
    }
}

/// Closed soil-layer polygon (the closing edge is implicit).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub soil: String,
    pub points: Polyline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Layer {
    pub fn new(soil: impl Into<String>, points: Polyline) -> Self {
        Self {
            soil: soil.into(),
            points,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Embankment/subsoil composition; selects the phreatic-line strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialLayout {
    #[default]
    ClayOnClay,
    ClayOnSand,
    SandOnClay,
    SandOnSand,
}

/// Labelled head line (piezometric line) of the cross-section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadLine {
    pub label: String,
    pub points: Polyline,
}

/// Serializable state of a cross-section; derived geometry is not stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub name: String,
    pub soils: Vec<Soil>,
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub characteristic_points: CharacteristicPoints,
    #[serde(default)]
    pub material_layout: MaterialLayout,
    #[serde(default)]
    pub ditch_points: Polyline,
    #[serde(default)]
    pub head_lines: Vec<HeadLine>,
    /// Index into `head_lines` of the active phreatic line.
    #[serde(default)]
    pub phreatic_line: Option<usize>,
}
