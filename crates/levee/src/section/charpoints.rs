//! Characteristic point registry (named landmark x-coordinates).
//!
//! - Singular types hold at most one entry; `set` overwrites in place.
//! - Every other type is multi-valued; `set` appends.
//! - A landmark can be registered with a NaN x (incomplete upstream settings);
//!   that is reported as `Landmark::Invalid`, distinct from `Landmark::Absent`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Landmark kinds on a levee cross-section profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicPointType {
    ToeLeft,
    CrestLeft,
    ReferencePoint,
    CrestRight,
    ToeRight,
    StartPolder,
    StartSurface,
    EndSurface,
    EmbankmentTopWaterSide,
    EmbankmentTopLandSide,
    EmbankmentToeWaterSide,
    EmbankmentToeLandSide,
    ShoulderBaseWaterSide,
    ShoulderBaseLandSide,
    DitchEmbankmentSide,
    DitchBottomEmbankmentSide,
    DitchBottomLandSide,
    DitchLandSide,
}

impl CharacteristicPointType {
    /// Types that can occur at most once per cross-section.
    pub fn is_singular(self) -> bool {
        use CharacteristicPointType::*;
        matches!(
            self,
            ToeLeft
                | CrestLeft
                | ReferencePoint
                | CrestRight
                | ToeRight
                | StartPolder
                | StartSurface
                | EndSurface
        )
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        use CharacteristicPointType::*;
        match self {
            ToeLeft => "toe left",
            CrestLeft => "crest left",
            ReferencePoint => "reference point",
            CrestRight => "crest right",
            ToeRight => "toe right",
            StartPolder => "start polder",
            StartSurface => "start surface",
            EndSurface => "end surface",
            EmbankmentTopWaterSide => "embankment top water side",
            EmbankmentTopLandSide => "embankment top land side",
            EmbankmentToeWaterSide => "embankment toe water side",
            EmbankmentToeLandSide => "embankment toe land side",
            ShoulderBaseWaterSide => "shoulder base water side",
            ShoulderBaseLandSide => "shoulder base land side",
            DitchEmbankmentSide => "ditch embankment side",
            DitchBottomEmbankmentSide => "ditch bottom embankment side",
            DitchBottomLandSide => "ditch bottom land side",
            DitchLandSide => "ditch land side",
        }
    }
}

impl fmt::Display for CharacteristicPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered landmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicPoint {
    pub point_type: CharacteristicPointType,
    pub x: f64,
}

impl CharacteristicPoint {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
    }
}

/// Result of `CharacteristicPoints::get`.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<'a> {
    Single(Option<&'a CharacteristicPoint>),
    Multiple(Vec<&'a CharacteristicPoint>),
}

impl<'a> Lookup<'a> {
    /// First entry (the only one for singular types).
    pub fn first(&self) -> Option<&'a CharacteristicPoint> {
        match self {
            Lookup::Single(p) => *p,
            Lookup::Multiple(v) => v.first().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

/// Why a landmark cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    /// Never registered.
    Absent,
    /// Registered with a non-finite coordinate.
    Invalid,
}

/// Ordered registry; insertion order is preserved for multi-valued types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacteristicPoints {
    points: Vec<CharacteristicPoint>,
}

impl CharacteristicPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `x` for `point_type` (replace for singular types, append otherwise).
    pub fn set(&mut self, point_type: CharacteristicPointType, x: f64) {
        if point_type.is_singular() {
            if let Some(cp) = self.points.iter_mut().find(|cp| cp.point_type == point_type) {
                cp.x = x;
                return;
            }
        }
        self.points.push(CharacteristicPoint { point_type, x });
    }

    pub fn get(&self, point_type: CharacteristicPointType) -> Lookup<'_> {
        if point_type.is_singular() {
            Lookup::Single(self.points.iter().find(|cp| cp.point_type == point_type))
        } else {
            Lookup::Multiple(
                self.points
                    .iter()
                    .filter(|cp| cp.point_type == point_type)
                    .collect(),
            )
        }
    }

    /// Usable x of a landmark (first entry for multi-valued types).
    pub fn landmark_x(&self, point_type: CharacteristicPointType) -> Result<f64, Landmark> {
        match self.get(point_type).first() {
            None => Err(Landmark::Absent),
            Some(cp) if !cp.is_valid() => Err(Landmark::Invalid),
            Some(cp) => Ok(cp.x),
        }
    }

    pub fn is_valid(&self, point_type: CharacteristicPointType) -> bool {
        self.landmark_x(point_type).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacteristicPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Translate every landmark horizontally.
    pub(crate) fn shift(&mut self, dx: f64) {
        for cp in &mut self.points {
            cp.x += dx;
        }
    }
}
