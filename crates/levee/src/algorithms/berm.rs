//! Stability berm on the land side of a levee, with optional ditch fill.
//!
//! Model (x to the right is landward)
//! - P1 is the surface at the land-side toe, P2 lies `height` above it. The
//!   berm top runs through P2 with slope `1 : slope_top` and starts at pA,
//!   its rightmost surface crossing left of the toe.
//! - pB lies `width` further along the berm top; from there the berm face
//!   drops with slope `1 : slope_bottom` to pC, its rightmost surface crossing.
//! - The outline pA→pB→pC is cut by the surface into pairs of crossings; each
//!   pair closes over the surface into one berm polygon.
//!
//! Limitation: a berm outline that only touches the surface at a vertex
//! produces an odd crossing count and is rejected.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{landmark, surface_z, Algorithm};
use crate::error::AlgorithmError;
use crate::geom::{contains_rounded, polyline_polyline_intersections, round_point, Point};
use crate::profile::points_strictly_between;
use crate::section::{CharacteristicPointType as T, CrossSection, Layer};

/// Label of the layer created by the ditch fill.
pub const DITCH_FILL_LABEL: &str = "ditch fill";

/// Berm dimensions; slopes are horizontal run per unit drop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BermParams {
    pub slope_top: f64,
    pub slope_bottom: f64,
    pub width: f64,
    pub height: f64,
    pub fill_ditch: bool,
}

impl Default for BermParams {
    fn default() -> Self {
        Self {
            slope_top: 10.0,
            slope_bottom: 1.0,
            width: 0.0,
            height: 0.0,
            fill_ditch: false,
        }
    }
}

impl BermParams {
    /// A berm is only sized when both dimensions are positive.
    #[inline]
    pub fn has_berm(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Berm construction algorithm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Berm {
    /// Soil of the berm layers.
    pub soilcode: String,
    /// Soil of the ditch fill layer.
    #[serde(default)]
    pub ditch_soilcode: Option<String>,
    #[serde(flatten)]
    pub params: BermParams,
}

impl Berm {
    pub fn new(soilcode: impl Into<String>, params: BermParams) -> Self {
        Self {
            soilcode: soilcode.into(),
            ditch_soilcode: None,
            params,
        }
    }

    /// Also fill the ditch with `soilcode`.
    pub fn with_ditch_fill(mut self, soilcode: impl Into<String>) -> Self {
        self.params.fill_ditch = true;
        self.ditch_soilcode = Some(soilcode.into());
        self
    }

    /// Ditch fill polygon: the surface between the two ditch landmarks closed
    /// by a straight top.
    fn ditch_fill(&self, cs: &CrossSection) -> Result<Layer, AlgorithmError> {
        let soil = self
            .ditch_soilcode
            .clone()
            .ok_or_else(|| AlgorithmError::input("cannot fill the ditch: no ditch soilcode set"))?;
        let missing = || AlgorithmError::execution("cannot fill the ditch: the surface is empty");
        let fp1 = cs
            .closest_surface_point(landmark(cs, T::DitchEmbankmentSide)?)
            .ok_or_else(missing)?;
        let fp2 = cs
            .closest_surface_point(landmark(cs, T::DitchLandSide)?)
            .ok_or_else(missing)?;
        let mut pts = vec![fp1, fp2];
        let mut bottom = points_strictly_between(cs.surface(), fp1.x, fp2.x);
        bottom.reverse();
        pts.extend(bottom);
        if pts.len() < 3 {
            return Err(AlgorithmError::execution(
                "cannot fill the ditch: no surface points between the ditch landmarks",
            ));
        }
        Ok(Layer::new(soil, pts).with_label(DITCH_FILL_LABEL))
    }

    /// Berm polygons against the current surface of `cs`.
    fn berm_layers(&self, cs: &CrossSection) -> Result<Vec<Layer>, AlgorithmError> {
        let BermParams {
            slope_top,
            slope_bottom,
            width,
            height,
            ..
        } = self.params;
        let (left, right) = (cs.left(), cs.right());
        let surface = cs.surface();

        let x_toe = landmark(cs, T::EmbankmentToeLandSide)?;
        let p1 = Point::new(x_toe, surface_z(cs, x_toe)?);
        let p2 = Point::new(p1.x, p1.y + height);
        let p3 = Point::new(left, p2.y + (p2.x - left) / slope_top);
        let p4 = Point::new(right, p2.y - (right - p2.x) / slope_top);

        let pa = polyline_polyline_intersections(&[p3, p4], surface)
            .into_iter()
            .filter(|p| p.x < p1.x)
            .max_by(|a, b| a.x.total_cmp(&b.x))
            .ok_or_else(|| {
                AlgorithmError::execution(
                    "no intersections on the left side of the toe, cannot create berm",
                )
            })?;
        let pb = Point::new(pa.x + width, pa.y - width / slope_top);
        let p5 = Point::new(right, pb.y - (right - pb.x) / slope_bottom);
        let pc = polyline_polyline_intersections(&[pb, p5], surface)
            .into_iter()
            .max_by(|a, b| a.x.total_cmp(&b.x))
            .ok_or_else(|| {
                AlgorithmError::execution(
                    "no intersections between point B and the right limit, cannot create berm",
                )
            })?;
        debug!(pa = ?pa, pb = ?pb, pc = ?pc, "berm outline");

        let mut hits: Vec<Point> = polyline_polyline_intersections(&[pa, pb, pc], surface)
            .into_iter()
            .map(round_point)
            .collect();
        if !contains_rounded(&hits, pa) {
            hits.insert(0, round_point(pa));
        }
        if !contains_rounded(&hits, pc) {
            hits.push(round_point(pc));
        }
        debug!(count = hits.len(), "berm surface crossings");
        if hits.len() % 2 != 0 {
            return Err(AlgorithmError::execution(
                "berm continues outside the right limit, cannot create berm",
            ));
        }

        let layers = hits
            .chunks_exact(2)
            .map(|pair| {
                let (l, r) = (pair[0], pair[1]);
                let mut pts = vec![l];
                if l.x < pb.x && pb.x < r.x {
                    pts.push(pb);
                }
                pts.push(r);
                let mut back = points_strictly_between(surface, l.x, r.x);
                back.reverse();
                pts.extend(back);
                Layer::new(self.soilcode.clone(), pts)
            })
            .collect();
        Ok(layers)
    }
}

impl Algorithm for Berm {
    fn check_input(&self, cs: &CrossSection) -> Result<(), AlgorithmError> {
        let p = &self.params;
        if p.has_berm() {
            if !cs.has_soilcode(&self.soilcode) {
                return Err(AlgorithmError::input(format!(
                    "invalid berm soilcode '{}'",
                    self.soilcode
                )));
            }
            landmark(cs, T::EmbankmentToeLandSide)?;
            if !(p.slope_top > 0.0 && p.slope_bottom > 0.0) {
                return Err(AlgorithmError::input("berm slopes must be positive"));
            }
        }
        if p.fill_ditch {
            landmark(cs, T::DitchEmbankmentSide)?;
            landmark(cs, T::DitchLandSide)?;
            match &self.ditch_soilcode {
                None => {
                    return Err(AlgorithmError::input(
                        "cannot fill the ditch: no ditch soilcode set",
                    ))
                }
                Some(code) if !cs.has_soilcode(code) => {
                    return Err(AlgorithmError::input(format!(
                        "cannot fill the ditch: invalid ditch soilcode '{code}'"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn apply(&self, cs: &CrossSection) -> Result<CrossSection, AlgorithmError> {
        let mut out = cs.clone();
        if self.params.fill_ditch {
            let fill = self.ditch_fill(&out)?;
            info!(points = fill.points.len(), "adding ditch fill layer");
            out.add_layer(fill)?;
        }
        if !self.params.has_berm() {
            return Ok(out);
        }
        let layers = self.berm_layers(&out)?;
        info!(count = layers.len(), soil = %self.soilcode, "adding berm layers");
        out.add_layers(layers)?;
        Ok(out)
    }
}
