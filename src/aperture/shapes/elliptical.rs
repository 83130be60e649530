use std::f64::consts::TAU;

use crate::aperture::curves::{Layer, Margins};
use crate::aperture::points::{append_arc, MIN_ARC_POINTS};
use crate::error::Result;
use crate::math::Point2;
use crate::solid::{MakeEllipticalTube, SolidId, SolidStore};

use super::ApertureShape;

/// An ellipse with equal semi-axes is built as a circle.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn resolve(semi_x: f64, semi_y: f64) -> ApertureShape {
    if semi_x == semi_y {
        ApertureShape::Circle { radius: semi_x }
    } else {
        ApertureShape::Ellipse { semi_x, semi_y }
    }
}

/// Elliptical tube with the given semi-axes.
///
/// # Errors
///
/// Returns an error if a semi-axis or the length is invalid.
pub fn make_solid(
    store: &mut SolidStore,
    name: &str,
    semi_x: f64,
    semi_y: f64,
    half_length: f64,
) -> Result<SolidId> {
    MakeEllipticalTube::new(name, semi_x, semi_y, half_length).execute(store)
}

/// Cutter radius: the larger container-subtraction semi-axis plus ten
/// percent.
#[must_use]
pub fn intersection_radius(semi_x: f64, semi_y: f64, margins: Margins) -> f64 {
    (semi_x.max(semi_y) + margins.offset(Layer::ContainerSubtraction)) * 1.1
}

/// Clockwise outline sampled with `points_per_full_turn` points, starting
/// at the top.
#[must_use]
pub fn outline(semi_x: f64, semi_y: f64, points_per_full_turn: usize) -> Vec<Point2> {
    let mut seq = Vec::new();
    append_arc(
        &mut seq,
        0.0,
        TAU,
        semi_x,
        semi_y,
        points_per_full_turn.max(MIN_ARC_POINTS),
        0.0,
        0.0,
    );
    seq
}
