//! Diamond with optionally rounded corners.
//!
//! `aper1`/`aper2` are the x and y half-widths of the sharp diamond and
//! `aper3` the corner radius, zero for sharp corners. Rounded corners are
//! tangent to both neighbouring edges, also when `aper1 != aper2`.

use std::f64::consts::FRAC_PI_2;

use crate::aperture::curves::{BoundaryCurveSet, Margins};
use crate::aperture::points::{append_arc_inclusive, arc_segments};
use crate::math::polygon_2d::offset_mitred;
use crate::math::Point2;

/// The four clockwise vertices of the sharp diamond.
#[must_use]
pub fn base_points(aper1: f64, aper2: f64) -> Vec<Point2> {
    vec![
        Point2::new(0.0, aper2),
        Point2::new(aper1, 0.0),
        Point2::new(0.0, -aper2),
        Point2::new(-aper1, 0.0),
    ]
}

/// Rounded outline grown by `distance`: the arc centres stay fixed and the
/// radii grow, so the straight edges move out by exactly `distance`.
fn rounded_outline(
    aper1: f64,
    aper2: f64,
    corner_radius: f64,
    distance: f64,
    points_per_full_turn: usize,
) -> Vec<Point2> {
    // Half opening angle of the top and bottom corners.
    let alpha = aper1.atan2(aper2);
    let h = FRAC_PI_2;
    let top = aper2 - corner_radius / alpha.sin();
    let side = aper1 - corner_radius / alpha.cos();
    let r = corner_radius + distance;

    let n_top = arc_segments(2.0 * (h - alpha), points_per_full_turn);
    let n_side = arc_segments(2.0 * alpha, points_per_full_turn);
    let mut seq = Vec::with_capacity(2 * (n_top + n_side) + 4);
    append_arc_inclusive(&mut seq, -(h - alpha), h - alpha, r, n_top, 0.0, top);
    append_arc_inclusive(&mut seq, h - alpha, h + alpha, r, n_side, side, 0.0);
    append_arc_inclusive(&mut seq, h + alpha, 3.0 * h - alpha, r, n_top, 0.0, -top);
    append_arc_inclusive(&mut seq, 3.0 * h - alpha, 3.0 * h + alpha, r, n_side, -side, 0.0);
    seq
}

/// Boundary curves for a sharp or rounded diamond.
#[must_use]
pub fn generate_points(
    aper1: f64,
    aper2: f64,
    aper3: f64,
    margins: Margins,
    points_per_full_turn: usize,
) -> BoundaryCurveSet {
    if aper3 > 0.0 {
        BoundaryCurveSet::from_outline(margins, |d| {
            rounded_outline(aper1, aper2, aper3, d, points_per_full_turn)
        })
    } else {
        let base = base_points(aper1, aper2);
        BoundaryCurveSet::from_outline(margins, |d| offset_mitred(&base, d))
    }
}

/// Cutter radius: the larger container-subtraction half-width plus one
/// percent. The farthest points of a diamond lie on the axes.
#[must_use]
pub fn intersection_radius(curves: &BoundaryCurveSet) -> f64 {
    curves.extent.max_abs_x().max(curves.extent.max_abs_y()) * 1.01
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aperture::curves::Layer;
    use crate::math::distance_2d::{point_to_line_dist, point_to_polygon_dist};
    use crate::math::polygon_2d::{is_clockwise, max_radius};

    #[test]
    fn sharp_diamond_offsets_edges() {
        let m = Margins::new(1.0, 0.0);
        let curves = generate_points(30.0, 20.0, 0.0, m, 40);
        let base = base_points(30.0, 20.0);
        for i in 0..4 {
            let j = (i + 1) % 4;
            let dist = point_to_line_dist(&curves.pipe_inner[i], &base[i], &base[j]);
            assert!((dist - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rounded_corners_stay_inside_sharp_diamond() {
        let m = Margins::new(1e-3, 1.0);
        let curves = generate_points(30.0, 20.0, 3.0, m, 40);
        assert!(curves.is_clockwise());
        // A sharp diamond grown by the same offset reaches higher.
        let alpha = 30.0_f64.atan2(20.0);
        assert!(curves.extent.y_pos < 20.0 + m.offset(Layer::ContainerSubtraction) / alpha.sin());
        assert!(intersection_radius(&curves) > max_radius(&curves.container_subtraction));
    }

    #[test]
    fn rounded_edges_move_by_offset() {
        let m = Margins::new(1e-3, 2.0);
        let curves = generate_points(30.0, 20.0, 3.0, m, 40);
        let d = m.offset(Layer::PipeOuter);
        // Every outer vertex is `d` from the vacuum outline.
        for p in &curves.pipe_outer {
            let dist = point_to_polygon_dist(p, &curves.vacuum);
            assert!(dist > d - 0.05 && dist < d + 1e-6, "{dist}");
        }
    }

    #[test]
    fn rounded_outline_is_tangent_at_joins() {
        let outline = rounded_outline(30.0, 20.0, 3.0, 0.0, 40);
        assert!(is_clockwise(&outline));
        // The last point of the top arc and the first of the side arc both
        // lie on the upper right edge of the sharp diamond.
        let base = base_points(30.0, 20.0);
        for p in &outline {
            let on_edge = point_to_line_dist(p, &base[0], &base[1]);
            if p.x > 0.0 && p.y > 0.0 && on_edge < 1e-6 {
                return;
            }
        }
        panic!("no tangent point on the upper right edge");
    }
}
