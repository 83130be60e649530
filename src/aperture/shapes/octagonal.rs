//! Rectangle with chamfered corners.
//!
//! `aper1`/`aper2` are the full half-widths, `aper3`/`aper4` the x and y
//! coordinates where the chamfers meet the flat sides.

use crate::aperture::curves::{BoundaryCurveSet, Margins};
use crate::math::polygon_2d::offset_mitred;
use crate::math::Point2;

/// The eight clockwise corners of the vacuum outline, starting at the right
/// end of the top flat.
#[must_use]
pub fn base_points(aper1: f64, aper2: f64, aper3: f64, aper4: f64) -> Vec<Point2> {
    vec![
        Point2::new(aper3, aper2),
        Point2::new(aper1, aper4),
        Point2::new(aper1, -aper4),
        Point2::new(aper3, -aper2),
        Point2::new(-aper3, -aper2),
        Point2::new(-aper1, -aper4),
        Point2::new(-aper1, aper4),
        Point2::new(-aper3, aper2),
    ]
}

/// Boundary curves grown by mitred offset, so every facet keeps its angle
/// and moves out by exactly the layer offset.
#[must_use]
pub fn generate_points(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    aper4: f64,
    margins: Margins,
) -> BoundaryCurveSet {
    let base = base_points(aper1, aper2, aper3, aper4);
    BoundaryCurveSet::from_outline(margins, |d| offset_mitred(&base, d))
}

/// Cutter radius: the half-diagonal of the container-subtraction extent
/// plus one percent.
#[must_use]
pub fn intersection_radius(curves: &BoundaryCurveSet) -> f64 {
    curves.extent.max_abs_x().hypot(curves.extent.max_abs_y()) * 1.01
}
