//! Phreatic line (groundwater line) through a levee.
//!
//! Model
//! - Six control points A..F from landmarks, water levels and offsets; the
//!   construction depends on the material layout.
//! - Post-processing threads the line through the surface vertices between
//!   C and F and clamps it below the surface (optionally lowered by
//!   `surface_offset`) and below its own preceding point, so the line never
//!   rises landward of C.
//! - The result spans the full model width: `(left, river_level)` first and
//!   `(right, polder_level)` last.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{landmark, surface_z, Algorithm};
use crate::error::AlgorithmError;
use crate::geom::cfg::F_EDGE_MARGIN;
use crate::geom::{interpolate_z, line_polyline_intersections, round_point, Point, Polyline};
use crate::profile::points_strictly_between;
use crate::section::{CharacteristicPointType as T, CrossSection, MaterialLayout};

/// Vertical offsets of the control points (metres).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhreaticOffsets {
    /// Drop from A to B.
    pub b_offset: f64,
    /// Drop from A to C.
    pub c_offset: f64,
    /// Depth of E below the surface at the land-side toe.
    pub e_offset: f64,
    /// Depth of D below the surface; `None` interpolates D on C→E.
    pub d_offset: Option<f64>,
    /// Minimum depth of the line below the surface landward of C.
    pub surface_offset: f64,
}

impl Default for PhreaticOffsets {
    fn default() -> Self {
        Self {
            b_offset: 1.0,
            c_offset: 1.5,
            e_offset: 0.0,
            d_offset: None,
            surface_offset: 0.0,
        }
    }
}

/// Control points of the phreatic line, ordered water side to land side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    /// River level meets the water-side slope.
    pub a: Point,
    pub b: Point,
    /// Below the land-side crest.
    pub c: Point,
    /// Shoulder base (or halfway C→E).
    pub d: Point,
    /// Land-side toe.
    pub e: Point,
    /// Line reaches the polder level.
    pub f: Point,
}

/// Phreatic line builder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhreaticLine {
    pub river_level: f64,
    pub polder_level: f64,
    #[serde(default)]
    pub offsets: PhreaticOffsets,
}

impl PhreaticLine {
    pub fn new(river_level: f64, polder_level: f64) -> Self {
        Self {
            river_level,
            polder_level,
            offsets: PhreaticOffsets::default(),
        }
    }

    pub fn with_offsets(mut self, offsets: PhreaticOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    /// Validated phreatic line polyline for `cs`.
    pub fn build(&self, cs: &CrossSection) -> Result<Polyline, AlgorithmError> {
        self.check_input(cs)?;
        let cp = self.control_points(cs)?;
        self.thread(cs, &cp)
    }

    /// Control points A..F for the layout of `cs`.
    ///
    /// Expects the landmarks checked by `check_input`.
    pub fn control_points(&self, cs: &CrossSection) -> Result<ControlPoints, AlgorithmError> {
        let (a, b, c, d, e) = match cs.material_layout() {
            MaterialLayout::ClayOnClay | MaterialLayout::ClayOnSand => self.clay_points(cs)?,
            MaterialLayout::SandOnClay => self.sand_on_clay_points(cs)?,
            MaterialLayout::SandOnSand => {
                return Err(AlgorithmError::NotSupported(
                    "phreatic line for sand on sand".into(),
                ))
            }
        };
        let f = self.polder_point(cs, d, e);
        let cp = ControlPoints { a, b, c, d, e, f };
        debug!(
            a = ?cp.a,
            b = ?cp.b,
            c = ?cp.c,
            d = ?cp.d,
            e = ?cp.e,
            f = ?cp.f,
            "phreatic control points"
        );
        Ok(cp)
    }

    /// A: first crossing of the river level with the surface, left to right.
    fn river_point(&self, cs: &CrossSection) -> Result<Point, AlgorithmError> {
        let hits = line_polyline_intersections(
            Point::new(cs.left(), self.river_level),
            Point::new(cs.right(), self.river_level),
            cs.surface(),
        );
        debug!(count = hits.len(), "river level crossings");
        hits.first().copied().map(round_point).ok_or_else(|| {
            AlgorithmError::execution("no intersection with the surface at the given river level")
        })
    }

    /// D on the segment C→E (or below the surface if `d_offset` is set).
    fn shoulder_point(
        &self,
        cs: &CrossSection,
        c: Point,
        e: Point,
    ) -> Result<Point, AlgorithmError> {
        let x = match landmark(cs, T::ShoulderBaseLandSide) {
            Ok(x) => x,
            Err(_) => 0.5 * (c.x + e.x),
        };
        let z = match self.offsets.d_offset {
            Some(off) => surface_z(cs, x)? - off,
            None => interpolate_z(c, e, x),
        };
        Ok(Point::new(x, z))
    }

    fn clay_points(
        &self,
        cs: &CrossSection,
    ) -> Result<(Point, Point, Point, Point, Point), AlgorithmError> {
        let off = &self.offsets;
        let a = self.river_point(cs)?;
        let b = Point::new(a.x + 1.0, a.y - off.b_offset);
        let c = Point::new(landmark(cs, T::EmbankmentTopLandSide)?, a.y - off.c_offset);
        let x_e = landmark(cs, T::EmbankmentToeLandSide)?;
        let e = Point::new(x_e, surface_z(cs, x_e)? - off.e_offset);
        let d = self.shoulder_point(cs, c, e)?;
        Ok((a, b, c, d, e))
    }

    /// Sand body: the line drops halfway to the water-side toe level at B and
    /// leaves E a quarter of the head above the land-side toe.
    fn sand_on_clay_points(
        &self,
        cs: &CrossSection,
    ) -> Result<(Point, Point, Point, Point, Point), AlgorithmError> {
        let a = self.river_point(cs)?;
        let z_toe_water = surface_z(cs, landmark(cs, T::EmbankmentToeWaterSide)?)?;
        let b = Point::new(a.x + 1.0, a.y - 0.5 * (a.y - z_toe_water));
        let x_e = landmark(cs, T::EmbankmentToeLandSide)?;
        let z_e = surface_z(cs, x_e)? - self.offsets.e_offset;
        let e = Point::new(x_e, z_e + 0.25 * (a.y - z_e));
        let x_c = landmark(cs, T::EmbankmentTopLandSide)?;
        let c = Point::new(x_c, interpolate_z(b, e, x_c));
        let d = self.shoulder_point(cs, c, e)?;
        Ok((a, b, c, d, e))
    }

    /// F: the line D→E extended to the polder level, replaced by the first
    /// ditch crossing landward of E when the cross-section has a ditch.
    fn polder_point(&self, cs: &CrossSection, d: Point, e: Point) -> Point {
        let right = cs.right();
        let x = e.x + (self.polder_level - e.y) * (e.x - d.x) / (e.y - d.y);
        let mut f = if x.is_finite() && x > e.x && x < right {
            Point::new(x, self.polder_level)
        } else {
            warn!(x, "polder level not reached between E and the right edge");
            Point::new(right - F_EDGE_MARGIN, self.polder_level)
        };
        let ditch = cs.ditch_points();
        if ditch.len() >= 2 {
            let hits = line_polyline_intersections(
                Point::new(cs.left(), self.polder_level),
                Point::new(right, self.polder_level),
                &ditch,
            );
            if let Some(p) = hits.into_iter().find(|p| p.x > e.x) {
                f = round_point(p);
            }
        }
        f
    }

    /// Full polyline through the control points, clamped under the surface.
    fn thread(&self, cs: &CrossSection, cp: &ControlPoints) -> Result<Polyline, AlgorithmError> {
        let surface = cs.surface();
        let mut line = vec![Point::new(cs.left(), self.river_level), cp.a, cp.b, cp.c];
        for (p, q) in [(cp.c, cp.d), (cp.d, cp.e), (cp.e, cp.f)] {
            line.extend(
                points_strictly_between(surface, p.x, q.x)
                    .into_iter()
                    .map(|s| Point::new(s.x, interpolate_z(p, q, s.x))),
            );
            line.push(q);
        }
        for i in 1..line.len() {
            let x = line[i].x;
            if x <= cp.c.x || x > cp.f.x {
                continue;
            }
            let limit = surface_z(cs, x)? - self.offsets.surface_offset;
            if line[i].y > limit {
                line[i].y = limit;
            }
            if line[i].y > line[i - 1].y {
                line[i].y = line[i - 1].y;
            }
        }
        line.push(Point::new(cs.right(), self.polder_level));
        if let Some(w) = line.windows(2).find(|w| w[1].x <= w[0].x) {
            return Err(AlgorithmError::execution(format!(
                "phreatic line is not strictly increasing in x at x = {:.3}",
                w[1].x
            )));
        }
        Ok(line)
    }
}

impl Algorithm for PhreaticLine {
    fn check_input(&self, cs: &CrossSection) -> Result<(), AlgorithmError> {
        for t in [
            T::EmbankmentTopWaterSide,
            T::EmbankmentTopLandSide,
            T::EmbankmentToeLandSide,
            T::EmbankmentToeWaterSide,
        ] {
            landmark(cs, t)?;
        }
        if !(self.river_level.is_finite() && self.polder_level.is_finite()) {
            return Err(AlgorithmError::input("water levels must be finite"));
        }
        Ok(())
    }

    fn apply(&self, cs: &CrossSection) -> Result<CrossSection, AlgorithmError> {
        let cp = self.control_points(cs)?;
        let line = self.thread(cs, &cp)?;
        let mut out = cs.clone();
        out.set_phreatic_line(line);
        Ok(out)
    }
}
