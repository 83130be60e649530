//! Rectangle with quarter-circle corners.
//!
//! The corner arcs are centred at `(±aper1, ±aper2)` with radius `aper3`,
//! so the vacuum reaches `aper1 + aper3` in x and `aper2 + aper3` in y.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::aperture::curves::{BoundaryCurveSet, Layer, Margins};
use crate::aperture::points::{append_arc_inclusive, arc_segments};
use crate::math::Point2;

fn outline(aper1: f64, aper2: f64, radius: f64, points_per_full_turn: usize) -> Vec<Point2> {
    let n = arc_segments(FRAC_PI_2, points_per_full_turn);
    let mut seq = Vec::with_capacity(4 * (n + 1));
    append_arc_inclusive(&mut seq, 0.0, FRAC_PI_2, radius, n, aper1, aper2);
    append_arc_inclusive(&mut seq, FRAC_PI_2, PI, radius, n, aper1, -aper2);
    append_arc_inclusive(&mut seq, PI, 3.0 * FRAC_PI_2, radius, n, -aper1, -aper2);
    append_arc_inclusive(&mut seq, 3.0 * FRAC_PI_2, TAU, radius, n, -aper1, aper2);
    seq
}

/// Boundary curves: the arc radius grows with each layer offset.
#[must_use]
pub fn generate_points(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    margins: Margins,
    points_per_full_turn: usize,
) -> BoundaryCurveSet {
    BoundaryCurveSet::from_outline(margins, |d| {
        outline(aper1, aper2, aper3 + d, points_per_full_turn)
    })
}

/// Cutter radius: distance to the farthest arc centre plus the grown arc
/// radius, plus one percent.
#[must_use]
pub fn intersection_radius(aper1: f64, aper2: f64, aper3: f64, margins: Margins) -> f64 {
    (aper1.hypot(aper2) + aper3 + margins.offset(Layer::ContainerSubtraction)) * 1.01
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::max_radius;

    #[test]
    fn extent_includes_arc_radius() {
        let m = Margins::new(1e-3, 1.0);
        let curves = generate_points(20.0, 10.0, 5.0, m, 40);
        let o = m.offset(Layer::ContainerSubtraction);
        assert!((curves.extent.x_pos - (25.0 + o)).abs() < 1e-9);
        assert!((curves.extent.y_neg + (15.0 + o)).abs() < 1e-9);
        assert!(curves.is_clockwise());
    }

    #[test]
    fn zero_straight_sections_make_a_circle() {
        let m = Margins::new(1e-3, 1.0);
        let curves = generate_points(0.0, 0.0, 5.0, m, 40);
        assert!(curves.vacuum.iter().all(|p| (p.coords.norm() - 5.0).abs() < 1e-9));
        // Shared arc end points collapse.
        assert_eq!(curves.vacuum.len(), 40);
    }

    #[test]
    fn radius_covers_curve() {
        let m = Margins::new(1e-3, 1.0);
        let curves = generate_points(20.0, 10.0, 5.0, m, 40);
        let radius = intersection_radius(20.0, 10.0, 5.0, m);
        assert!(radius > max_radius(&curves.container_subtraction));
    }
}
