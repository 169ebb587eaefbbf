//! Random layered levee cross-sections (seeded, reproducible).
//!
//! Model
//! - A sand base below a clay layer whose top traces polder ground (z = 0), a
//!   trapezoidal dike and polder ground again.
//! - The land-side slope optionally gets a kink registered as the shoulder
//!   base land side.
//! - Embankment toe/top landmarks are registered on both sides and the layout
//!   is clay-on-clay.
//!
//! Used by property tests and benches; the same `(cfg, seed)` always yields
//! the same cross-section.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{CharacteristicPointType, CrossSection, Layer, Soil};
use crate::error::GeometryError;
use crate::geom::Point;

/// Soil code of the generated subsoil layer.
pub const SAND: &str = "sand";
/// Soil code of the generated dike body.
pub const CLAY: &str = "clay";

/// Levee sampler configuration; ranges are inclusive `(min, max)` pairs.
#[derive(Clone, Copy, Debug)]
pub struct LeveeCfg {
    /// Model width; the geometry spans `[0, width]`.
    pub width: f64,
    /// Bottom of the sand base.
    pub bottom: f64,
    /// Sand/clay interface elevation (below ground level 0).
    pub sand_top: f64,
    pub crest_height: (f64, f64),
    pub crest_width: (f64, f64),
    /// Horizontal run per unit rise of the dike slopes.
    pub slope_run: (f64, f64),
    /// x of the water-side toe.
    pub toe_water_x: (f64, f64),
    /// Probability of a kink on the land-side slope.
    pub shoulder_prob: f64,
}

impl Default for LeveeCfg {
    fn default() -> Self {
        Self {
            width: 120.0,
            bottom: -10.0,
            sand_top: -3.0,
            crest_height: (3.0, 8.0),
            crest_width: (3.0, 8.0),
            slope_run: (2.0, 4.0),
            toe_water_x: (15.0, 25.0),
            shoulder_prob: 0.5,
        }
    }
}

#[inline]
fn sample<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Draw a levee cross-section for `seed`.
pub fn draw_levee(cfg: &LeveeCfg, seed: u64) -> Result<CrossSection, GeometryError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let h = sample(&mut rng, cfg.crest_height);
    let toe_water = sample(&mut rng, cfg.toe_water_x);
    let top_water = toe_water + h * sample(&mut rng, cfg.slope_run);
    let top_land = top_water + sample(&mut rng, cfg.crest_width);
    let toe_land = top_land + h * sample(&mut rng, cfg.slope_run);
    let shoulder = if rng.gen_bool(cfg.shoulder_prob.clamp(0.0, 1.0)) {
        let fx = rng.gen_range(0.35..0.65);
        let fz = rng.gen_range(0.3..0.5);
        Some(Point::new(top_land + fx * (toe_land - top_land), fz * h))
    } else {
        None
    };

    let w = cfg.width;
    let sand = Layer::new(
        SAND,
        vec![
            Point::new(0.0, cfg.bottom),
            Point::new(w, cfg.bottom),
            Point::new(w, cfg.sand_top),
            Point::new(0.0, cfg.sand_top),
        ],
    );
    let mut clay_pts = vec![
        Point::new(0.0, cfg.sand_top),
        Point::new(w, cfg.sand_top),
        Point::new(w, 0.0),
        Point::new(toe_land, 0.0),
    ];
    clay_pts.extend(shoulder);
    clay_pts.extend([
        Point::new(top_land, h),
        Point::new(top_water, h),
        Point::new(toe_water, 0.0),
        Point::new(0.0, 0.0),
    ]);
    let clay = Layer::new(CLAY, clay_pts);

    let mut cs = CrossSection::new(vec![Soil::new(SAND), Soil::new(CLAY)], vec![sand, clay])?
        .with_name(format!("levee-{seed}"));
    cs.set_characteristic_point(CharacteristicPointType::EmbankmentToeWaterSide, toe_water);
    cs.set_characteristic_point(CharacteristicPointType::EmbankmentTopWaterSide, top_water);
    cs.set_characteristic_point(CharacteristicPointType::EmbankmentTopLandSide, top_land);
    cs.set_characteristic_point(CharacteristicPointType::EmbankmentToeLandSide, toe_land);
    if let Some(p) = shoulder {
        cs.set_characteristic_point(CharacteristicPointType::ShoulderBaseLandSide, p.x);
    }
    Ok(cs)
}
