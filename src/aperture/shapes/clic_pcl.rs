//! CLIC post-collision line: two half ellipses of different height.
//!
//! The upper half ellipse has semi-axes `(aper1, aper2)` and is raised by
//! `aper4`; the lower one has semi-axes `(aper1, aper3)` and sits on the
//! midplane. Vertical edges join them at `x = ±aper1`, so the y extent is
//! not symmetric.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::aperture::curves::{BoundaryCurveSet, Layer, Margins};
use crate::aperture::points::{append_arc, append_point, arc_segments};
use crate::math::Point2;

fn outline(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    aper4: f64,
    distance: f64,
    points_per_full_turn: usize,
) -> Vec<Point2> {
    let n = arc_segments(PI, points_per_full_turn);
    let half_width = aper1 + distance;
    let mut seq = Vec::with_capacity(2 * n + 2);
    append_arc(&mut seq, -FRAC_PI_2, FRAC_PI_2, half_width, aper2 + distance, n, 0.0, aper4);
    append_point(&mut seq, half_width, aper4);
    append_arc(&mut seq, FRAC_PI_2, 3.0 * FRAC_PI_2, half_width, aper3 + distance, n, 0.0, 0.0);
    append_point(&mut seq, -half_width, 0.0);
    seq
}

/// Boundary curves: both semi-axes of each half ellipse grow by the layer
/// offset.
#[must_use]
pub fn generate_points(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    aper4: f64,
    margins: Margins,
    points_per_full_turn: usize,
) -> BoundaryCurveSet {
    BoundaryCurveSet::from_outline(margins, |d| {
        outline(aper1, aper2, aper3, aper4, d, points_per_full_turn)
    })
}

/// Cutter radius: the larger reach of the two half ellipses, with a fifty
/// percent margin.
#[must_use]
pub fn intersection_radius(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    aper4: f64,
    margins: Margins,
) -> f64 {
    let o = margins.offset(Layer::ContainerSubtraction);
    let upper = aper4 + (aper1 + o).max(aper2 + o);
    let lower = (aper1 + o).max(aper3 + o);
    upper.max(lower) * 1.5
}
