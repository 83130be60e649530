use crate::math::{Point2, Vector3};

use super::SolidId;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

/// Geometric description of a solid, centred on the origin with the
/// longitudinal axis along z.
#[derive(Debug, Clone, PartialEq)]
pub enum SolidShape {
    /// Full-turn cylinder or annulus.
    Tubs {
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
    },
    /// Cylinder or annulus whose end faces are planes through `(0, 0, ∓half_length)`
    /// with the given outward unit normals.
    CutTubs {
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
        input_normal: Vector3,
        output_normal: Vector3,
    },
    /// Rectangular box.
    Box {
        half_x: f64,
        half_y: f64,
        half_z: f64,
    },
    /// Tube with an elliptical cross-section.
    EllipticalTube {
        semi_x: f64,
        semi_y: f64,
        half_length: f64,
    },
    /// Closed polygon extruded between two flat end faces.
    ExtrudedPolygon {
        points: Vec<Point2>,
        half_length: f64,
    },
    /// Boolean of two stored solids. The second operand is translated by
    /// `offset` in the frame of the first.
    Boolean {
        op: BooleanOp,
        first: SolidId,
        second: SolidId,
        offset: Vector3,
    },
}
