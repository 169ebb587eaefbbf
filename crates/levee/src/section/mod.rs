//! Cross-section aggregate: layers, soils, landmarks, head lines and the
//! derived boundary/surface.
//!
//! Purpose
//! - Hold the snapshot the construction algorithms read, and keep the derived
//!   `Profile` in sync with the layer set.
//!
//! Conventions
//! - Fields are private; every layer edit recomputes the profile, so
//!   `boundary()`/`surface()` always describe the current layers.
//! - Algorithms never mutate a caller's value: they clone, edit the clone and
//!   return it.

mod charpoints;
pub mod rand;
mod types;

pub use charpoints::{
    CharacteristicPoint, CharacteristicPointType, CharacteristicPoints, Landmark, Lookup,
};
pub use types::{HeadLine, Layer, MaterialLayout, Snapshot, Soil};

use crate::error::{GeometryError, ModelError};
use crate::geom::cfg::SNAP_TOL;
use crate::geom::{
    polyline_polyline_intersections, round3, snap_ring, split_ring_edges, Point, Polyline,
};
use crate::profile::{self, Profile};

/// Label given to head lines created by `set_phreatic_line`.
pub const PHREATIC_LINE_LABEL: &str = "Phreatic line";

/// A 2D levee cross-section with its derived outer geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossSection {
    name: String,
    soils: Vec<Soil>,
    layers: Vec<Layer>,
    characteristic_points: CharacteristicPoints,
    material_layout: MaterialLayout,
    ditch_points: Polyline,
    head_lines: Vec<HeadLine>,
    phreatic_line: Option<usize>,
    profile: Profile,
}

impl CrossSection {
    /// Build from soils and layers; fails if the layers do not merge into one region.
    pub fn new(soils: Vec<Soil>, layers: Vec<Layer>) -> Result<Self, GeometryError> {
        let profile = profile::extract(layers.iter().map(|l| l.points.as_slice()))?;
        Ok(Self {
            name: String::new(),
            soils,
            layers,
            characteristic_points: CharacteristicPoints::new(),
            material_layout: MaterialLayout::default(),
            ditch_points: Vec::new(),
            head_lines: Vec::new(),
            phreatic_line: None,
            profile,
        })
    }

    pub fn from_snapshot(s: Snapshot) -> Result<Self, GeometryError> {
        let mut cs = Self::new(s.soils, s.layers)?;
        cs.name = s.name;
        cs.characteristic_points = s.characteristic_points;
        cs.material_layout = s.material_layout;
        cs.ditch_points = s.ditch_points;
        cs.phreatic_line = s.phreatic_line.filter(|&i| i < s.head_lines.len());
        cs.head_lines = s.head_lines;
        Ok(cs)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name.clone(),
            soils: self.soils.clone(),
            layers: self.layers.clone(),
            characteristic_points: self.characteristic_points.clone(),
            material_layout: self.material_layout,
            ditch_points: self.ditch_points.clone(),
            head_lines: self.head_lines.clone(),
            phreatic_line: self.phreatic_line,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_material_layout(mut self, layout: MaterialLayout) -> Self {
        self.material_layout = layout;
        self
    }

    pub fn with_characteristic_points(mut self, cps: CharacteristicPoints) -> Self {
        self.characteristic_points = cps;
        self
    }

    pub fn with_ditch_points(mut self, points: Polyline) -> Self {
        self.ditch_points = points;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn soils(&self) -> &[Soil] {
        &self.soils
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn material_layout(&self) -> MaterialLayout {
        self.material_layout
    }

    pub fn set_material_layout(&mut self, layout: MaterialLayout) {
        self.material_layout = layout;
    }

    pub fn characteristic_points(&self) -> &CharacteristicPoints {
        &self.characteristic_points
    }

    pub fn set_characteristic_point(&mut self, point_type: CharacteristicPointType, x: f64) {
        self.characteristic_points.set(point_type, x);
    }

    /// Clockwise outer ring starting at the top-left corner.
    pub fn boundary(&self) -> &[Point] {
        &self.profile.boundary
    }

    /// Ground surface from the top-left to the top-right corner.
    pub fn surface(&self) -> &[Point] {
        &self.profile.surface
    }

    /// Left x of the geometry (over all layer points).
    pub fn left(&self) -> f64 {
        self.layer_points().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    /// Right x of the geometry (over all layer points).
    pub fn right(&self) -> f64 {
        self.layer_points().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn top(&self) -> f64 {
        self.layer_points().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn bottom(&self) -> f64 {
        self.layer_points().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    fn layer_points(&self) -> impl Iterator<Item = &Point> {
        self.layers.iter().flat_map(|l| l.points.iter())
    }

    pub fn has_soilcode(&self, code: &str) -> bool {
        self.soils.iter().any(|s| s.code == code)
    }

    /// Elevations where the vertical at `x` crosses a layer edge, highest first.
    ///
    /// Values are rounded to 3 decimals and de-duplicated; vertical edges
    /// contribute both end points.
    pub fn z_at(&self, x: f64) -> Vec<f64> {
        let mut zs = Vec::new();
        for layer in &self.layers {
            let pts = &layer.points;
            let n = pts.len();
            for i in 0..n {
                let p1 = pts[i];
                let p2 = pts[(i + 1) % n];
                if p1.x.min(p2.x) <= x && x <= p1.x.max(p2.x) {
                    if p1.x == p2.x {
                        zs.push(round3(p1.y));
                        zs.push(round3(p2.y));
                    } else {
                        zs.push(round3(p1.y + (x - p1.x) / (p2.x - p1.x) * (p2.y - p1.y)));
                    }
                }
            }
        }
        zs.sort_by(|a, b| b.total_cmp(a));
        zs.dedup();
        zs
    }

    /// Ground level at `x` (the highest layer crossing).
    pub fn surface_z_at(&self, x: f64) -> Option<f64> {
        self.z_at(x).first().copied()
    }

    pub fn surface_intersections(&self, polyline: &[Point]) -> Vec<Point> {
        polyline_polyline_intersections(polyline, self.surface())
    }

    /// Surface points with `left <= x <= right`.
    pub fn surface_points_between(&self, left: f64, right: f64) -> Vec<Point> {
        profile::points_between(self.surface(), left, right)
    }

    pub fn closest_surface_point(&self, x: f64) -> Option<Point> {
        profile::closest_point(self.surface(), x)
    }

    /// Ditch polyline: explicit points if given, else the surface between the
    /// ditch embankment side and ditch land side landmarks (empty if unknown).
    pub fn ditch_points(&self) -> Polyline {
        if !self.ditch_points.is_empty() {
            return self.ditch_points.clone();
        }
        let cps = &self.characteristic_points;
        match (
            cps.landmark_x(CharacteristicPointType::DitchEmbankmentSide),
            cps.landmark_x(CharacteristicPointType::DitchLandSide),
        ) {
            (Ok(a), Ok(b)) => self.surface_points_between(a.min(b), a.max(b)),
            _ => Vec::new(),
        }
    }

    /// Insert one layer and recompute the derived geometry.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), GeometryError> {
        self.add_layers(vec![layer])
    }

    /// Insert several layers at once; the profile is recomputed once.
    ///
    /// All layers are snapped to the 3-decimal grid, and every existing edge
    /// that a new vertex lies on (within `SNAP_TOL`) is split at that vertex,
    /// so old and new layers share their common edges exactly. The existing
    /// layers keep their shape but may gain vertices.
    ///
    /// On error the cross-section is left unchanged.
    pub fn add_layers(&mut self, layers: Vec<Layer>) -> Result<(), GeometryError> {
        let added: Vec<Layer> = layers
            .into_iter()
            .map(|l| Layer {
                points: snap_ring(&l.points),
                ..l
            })
            .collect();
        let anchors: Vec<Point> = added
            .iter()
            .flat_map(|l| l.points.iter().copied())
            .collect();
        let mut merged: Vec<Layer> = self
            .layers
            .iter()
            .map(|l| Layer {
                points: split_ring_edges(&snap_ring(&l.points), &anchors, SNAP_TOL),
                ..l.clone()
            })
            .collect();
        merged.extend(added);
        let profile = profile::extract(merged.iter().map(|l| l.points.as_slice()))?;
        self.layers = merged;
        self.profile = profile;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), GeometryError> {
        self.profile = profile::extract(self.layers.iter().map(|l| l.points.as_slice()))?;
        Ok(())
    }

    pub fn head_lines(&self) -> &[HeadLine] {
        &self.head_lines
    }

    /// Active phreatic line, if any.
    pub fn phreatic_line(&self) -> Option<&HeadLine> {
        self.phreatic_line.and_then(|i| self.head_lines.get(i))
    }

    pub fn phreatic_line_points(&self) -> Polyline {
        self.phreatic_line()
            .map(|hl| hl.points.clone())
            .unwrap_or_default()
    }

    /// Store `points` as a new head line and make it the active phreatic line.
    ///
    /// The previous phreatic line stays in `head_lines` (superseded).
    pub fn set_phreatic_line(&mut self, points: Polyline) {
        self.head_lines.push(HeadLine {
            label: PHREATIC_LINE_LABEL.to_string(),
            points,
        });
        self.phreatic_line = Some(self.head_lines.len() - 1);
    }

    /// Points of the most recently added head line labelled `label`.
    pub fn headline_coordinates(&self, label: &str) -> Result<&[Point], ModelError> {
        self.head_lines
            .iter()
            .rev()
            .find(|hl| hl.label == label)
            .map(|hl| hl.points.as_slice())
            .ok_or_else(|| ModelError::UnknownHeadLine(label.to_string()))
    }

    /// Overwrite the leading points of head line `label` with `coords`.
    pub fn set_headline_coordinates(
        &mut self,
        label: &str,
        coords: &[Point],
    ) -> Result<(), ModelError> {
        let hl = self
            .head_lines
            .iter_mut()
            .rev()
            .find(|hl| hl.label == label)
            .ok_or_else(|| ModelError::UnknownHeadLine(label.to_string()))?;
        if coords.len() > hl.points.len() {
            return Err(ModelError::TooManyCoordinates {
                label: label.to_string(),
                given: coords.len(),
                available: hl.points.len(),
            });
        }
        hl.points[..coords.len()].copy_from_slice(coords);
        Ok(())
    }

    /// Translate all geometry and landmarks horizontally by `dx`.
    pub(crate) fn shift(&mut self, dx: f64) -> Result<(), GeometryError> {
        for layer in &mut self.layers {
            for p in &mut layer.points {
                p.x += dx;
            }
        }
        for hl in &mut self.head_lines {
            for p in &mut hl.points {
                p.x += dx;
            }
        }
        for p in &mut self.ditch_points {
            p.x += dx;
        }
        self.characteristic_points.shift(dx);
        self.refresh()
    }
}

#[cfg(test)]
pub(crate) mod fixtures;
