//! Helpers that append points and sampled arcs to a growing outline.
//!
//! Angles are measured clockwise from +y: a point at angle `θ` on an arc is
//! `offset + (radius_a·sin θ, radius_b·cos θ)`. Increasing angles therefore
//! walk an outline clockwise starting from the top.

use std::f64::consts::TAU;

use crate::math::Point2;

/// Minimum number of samples for any curved section.
pub const MIN_ARC_POINTS: usize = 4;

/// Appends a single point.
pub fn append_point(seq: &mut Vec<Point2>, x: f64, y: f64) {
    seq.push(Point2::new(x, y));
}

/// Appends `n_points` samples of an elliptical arc, linearly spaced in angle
/// from `start_angle` up to, but excluding, `end_angle`.
#[allow(clippy::too_many_arguments)]
pub fn append_arc(
    seq: &mut Vec<Point2>,
    start_angle: f64,
    end_angle: f64,
    radius_a: f64,
    radius_b: f64,
    n_points: usize,
    x_offset: f64,
    y_offset: f64,
) {
    if n_points == 0 {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let delta = (end_angle - start_angle) / n_points as f64;
    seq.reserve(n_points);
    for i in 0..n_points {
        #[allow(clippy::cast_precision_loss)]
        let angle = start_angle + i as f64 * delta;
        seq.push(Point2::new(
            x_offset + radius_a * angle.sin(),
            y_offset + radius_b * angle.cos(),
        ));
    }
}

/// Appends a circular arc and then its exact end point, so the next straight
/// edge starts on the arc's tangent point.
#[allow(clippy::too_many_arguments)]
pub fn append_arc_inclusive(
    seq: &mut Vec<Point2>,
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    n_points: usize,
    x_offset: f64,
    y_offset: f64,
) {
    append_arc(seq, start_angle, end_angle, radius, radius, n_points, x_offset, y_offset);
    append_point(
        seq,
        x_offset + radius * end_angle.sin(),
        y_offset + radius * end_angle.cos(),
    );
}

/// Number of samples for an arc spanning `span` radians, proportional to
/// `points_per_full_turn` and never fewer than [`MIN_ARC_POINTS`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn arc_segments(span: f64, points_per_full_turn: usize) -> usize {
    let n = (span.abs() / TAU * points_per_full_turn as f64).ceil() as usize;
    n.max(MIN_ARC_POINTS)
}
