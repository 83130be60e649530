//! Arbitrary outlines read from a point file.

use crate::aperture::curves::{BoundaryCurveSet, Margins};
use crate::math::polygon_2d::{
    dedup_vertices, max_radius, offset_along_vertex_normals, to_clockwise,
};
use crate::math::Point2;

/// Boundary curves for an arbitrary polygon.
///
/// The points may wind either way; they are put in clockwise order first.
/// Each layer moves every vertex along its vertex normal, since a general
/// polygon has no analytic offset.
#[must_use]
pub fn generate_points(points: &[Point2], margins: Margins) -> BoundaryCurveSet {
    let base = to_clockwise(dedup_vertices(points.to_vec()));
    BoundaryCurveSet::from_outline(margins, |d| offset_along_vertex_normals(&base, d))
}

/// Cutter radius: the farthest container-subtraction vertex plus one
/// percent.
#[must_use]
pub fn intersection_radius(curves: &BoundaryCurveSet) -> f64 {
    max_radius(&curves.container_subtraction) * 1.01
}
