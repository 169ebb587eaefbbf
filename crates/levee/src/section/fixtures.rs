//! Hand-built cross-sections shared by the unit tests.
//!
//! All fixtures span x in [0, 60] with a sand base from z = -10 to -2 and a
//! clay dike with toe water side 5, top water side 15, top land side 20 and
//! toe land side 30. The reference surface is
//! (0,2) (5,2) (15,6) (20,6) (24,4) (30,0) (60,0).

use nalgebra::vector;

use super::{CharacteristicPointType as T, CrossSection, Layer, Soil};
use crate::geom::{Point, Polyline};

pub(crate) fn sand_base() -> Layer {
    Layer::new(
        "sand",
        vec![
            vector![0.0, -10.0],
            vector![60.0, -10.0],
            vector![60.0, -2.0],
            vector![0.0, -2.0],
        ],
    )
}

/// Clay polygon from its top between the right edge and the left edge.
fn clay_with_top(top_right_to_left: &[Point]) -> Layer {
    let mut pts: Polyline = vec![vector![0.0, -2.0], vector![60.0, -2.0]];
    pts.extend_from_slice(top_right_to_left);
    Layer::new("clay", pts)
}

fn dike_landmarks(cs: &mut CrossSection) {
    cs.set_characteristic_point(T::EmbankmentToeWaterSide, 5.0);
    cs.set_characteristic_point(T::EmbankmentTopWaterSide, 15.0);
    cs.set_characteristic_point(T::EmbankmentTopLandSide, 20.0);
    cs.set_characteristic_point(T::EmbankmentToeLandSide, 30.0);
}

fn build(clay: Layer) -> CrossSection {
    let mut cs = CrossSection::new(
        vec![Soil::new("sand"), Soil::new("clay")],
        vec![sand_base(), clay],
    )
    .expect("fixture geometry");
    dike_landmarks(&mut cs);
    cs
}

pub(crate) fn reference_surface() -> Polyline {
    vec![
        vector![0.0, 2.0],
        vector![5.0, 2.0],
        vector![15.0, 6.0],
        vector![20.0, 6.0],
        vector![24.0, 4.0],
        vector![30.0, 0.0],
        vector![60.0, 0.0],
    ]
}

/// Two-layer levee with the reference surface.
pub(crate) fn levee() -> CrossSection {
    build(clay_with_top(&[
        vector![60.0, 0.0],
        vector![30.0, 0.0],
        vector![24.0, 4.0],
        vector![20.0, 6.0],
        vector![15.0, 6.0],
        vector![5.0, 2.0],
        vector![0.0, 2.0],
    ]))
}

/// Reference levee with a narrow spike (31,0) (32,3) (33,0) on the polder.
pub(crate) fn spiked_levee() -> CrossSection {
    build(clay_with_top(&[
        vector![60.0, 0.0],
        vector![33.0, 0.0],
        vector![32.0, 3.0],
        vector![31.0, 0.0],
        vector![30.0, 0.0],
        vector![24.0, 4.0],
        vector![20.0, 6.0],
        vector![15.0, 6.0],
        vector![5.0, 2.0],
        vector![0.0, 2.0],
    ]))
}

/// Reference levee with a ditch from x = 40 to 46 (bottom -1.5), landmarks set.
pub(crate) fn ditched_levee() -> CrossSection {
    let mut cs = build(clay_with_top(&[
        vector![60.0, 0.0],
        vector![46.0, 0.0],
        vector![44.0, -1.5],
        vector![42.0, -1.5],
        vector![40.0, 0.0],
        vector![30.0, 0.0],
        vector![24.0, 4.0],
        vector![20.0, 6.0],
        vector![15.0, 6.0],
        vector![5.0, 2.0],
        vector![0.0, 2.0],
    ]));
    cs.set_characteristic_point(T::DitchEmbankmentSide, 40.0);
    cs.set_characteristic_point(T::DitchLandSide, 46.0);
    cs
}

/// Levee whose land side ends on a plateau at z = 4.5, so z = 4 is only
/// crossed once, on the water-side slope at x = 10.
pub(crate) fn plateau_levee() -> CrossSection {
    build(clay_with_top(&[
        vector![60.0, 4.5],
        vector![30.0, 4.5],
        vector![20.0, 6.0],
        vector![15.0, 6.0],
        vector![5.0, 2.0],
        vector![0.0, 2.0],
    ]))
}

/// Flat sand block with top z = 0 and only the toe land side at 30.
pub(crate) fn flat() -> CrossSection {
    let sand = Layer::new(
        "sand",
        vec![
            vector![0.0, -10.0],
            vector![60.0, -10.0],
            vector![60.0, 0.0],
            vector![0.0, 0.0],
        ],
    );
    let mut cs = CrossSection::new(vec![Soil::new("sand")], vec![sand]).expect("fixture geometry");
    cs.set_characteristic_point(T::EmbankmentToeLandSide, 30.0);
    cs
}
