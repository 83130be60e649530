use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector3, TOLERANCE};

use super::{SolidId, SolidShape, SolidStore};

/// Rejects NaN, infinite and negative dimensions.
///
/// Zero is accepted: a zero-sized aperture is a degenerate but tolerated
/// input that the host engine may or may not complain about later.
fn check_dimension(solid: &str, parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension {
            solid: solid.to_owned(),
            parameter,
            value,
        }
        .into())
    }
}

fn check_half_length(solid: &str, half_length: f64) -> Result<()> {
    check_dimension(solid, "half_length", half_length)?;
    if half_length < TOLERANCE {
        return Err(GeometryError::Degenerate(format!("{solid}: zero length")).into());
    }
    Ok(())
}

/// Creates a full-turn cylinder (`inner_radius == 0`) or annulus.
pub struct MakeTubs {
    name: String,
    inner_radius: f64,
    outer_radius: f64,
    half_length: f64,
}

impl MakeTubs {
    /// Creates a new `MakeTubs` operation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
    ) -> Self {
        Self {
            name: name.into(),
            inner_radius,
            outer_radius,
            half_length,
        }
    }

    /// Executes the operation, adding the solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is negative or not finite, the length
    /// is zero, or the inner radius exceeds the outer radius.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        check_dimension(&self.name, "inner_radius", self.inner_radius)?;
        check_dimension(&self.name, "outer_radius", self.outer_radius)?;
        check_half_length(&self.name, self.half_length)?;
        if self.inner_radius > self.outer_radius {
            return Err(GeometryError::Degenerate(format!(
                "{}: inner radius {} exceeds outer radius {}",
                self.name, self.inner_radius, self.outer_radius
            ))
            .into());
        }
        Ok(store.add(
            self.name.clone(),
            SolidShape::Tubs {
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                half_length: self.half_length,
            },
        ))
    }
}

/// Creates a cylinder or annulus with planar, possibly tilted, end faces.
///
/// The input face passes through `(0, 0, -half_length)` and its outward
/// normal must point backwards along z; the output face passes through
/// `(0, 0, half_length)` with a forward-pointing normal.
pub struct MakeCutTubs {
    name: String,
    inner_radius: f64,
    outer_radius: f64,
    half_length: f64,
    input_normal: Vector3,
    output_normal: Vector3,
}

impl MakeCutTubs {
    /// Creates a new `MakeCutTubs` operation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
        input_normal: Vector3,
        output_normal: Vector3,
    ) -> Self {
        Self {
            name: name.into(),
            inner_radius,
            outer_radius,
            half_length,
            input_normal,
            output_normal,
        }
    }

    /// Executes the operation, adding the solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid radii or length, or when a face normal is
    /// zero-length or points the wrong way along z.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        check_dimension(&self.name, "inner_radius", self.inner_radius)?;
        check_dimension(&self.name, "outer_radius", self.outer_radius)?;
        check_half_length(&self.name, self.half_length)?;
        let input = unit(self.input_normal)?;
        let output = unit(self.output_normal)?;
        if input.z >= 0.0 || output.z <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "{}: face normals must point out of the solid along z",
                self.name
            ))
            .into());
        }
        Ok(store.add(
            self.name.clone(),
            SolidShape::CutTubs {
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                half_length: self.half_length,
                input_normal: input,
                output_normal: output,
            },
        ))
    }
}

fn unit(v: Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Creates a box centred on the origin.
pub struct MakeBox {
    name: String,
    half_x: f64,
    half_y: f64,
    half_z: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, half_x: f64, half_y: f64, half_z: f64) -> Self {
        Self {
            name: name.into(),
            half_x,
            half_y,
            half_z,
        }
    }

    /// Executes the operation, adding the solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is invalid.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        check_dimension(&self.name, "half_x", self.half_x)?;
        check_dimension(&self.name, "half_y", self.half_y)?;
        check_half_length(&self.name, self.half_z)?;
        Ok(store.add(
            self.name.clone(),
            SolidShape::Box {
                half_x: self.half_x,
                half_y: self.half_y,
                half_z: self.half_z,
            },
        ))
    }
}

/// Creates a tube of elliptical cross-section.
pub struct MakeEllipticalTube {
    name: String,
    semi_x: f64,
    semi_y: f64,
    half_length: f64,
}

impl MakeEllipticalTube {
    /// Creates a new `MakeEllipticalTube` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, semi_x: f64, semi_y: f64, half_length: f64) -> Self {
        Self {
            name: name.into(),
            semi_x,
            semi_y,
            half_length,
        }
    }

    /// Executes the operation, adding the solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is invalid.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        check_dimension(&self.name, "semi_x", self.semi_x)?;
        check_dimension(&self.name, "semi_y", self.semi_y)?;
        check_half_length(&self.name, self.half_length)?;
        Ok(store.add(
            self.name.clone(),
            SolidShape::EllipticalTube {
                semi_x: self.semi_x,
                semi_y: self.semi_y,
                half_length: self.half_length,
            },
        ))
    }
}

/// Extrudes a closed 2D polygon between two flat end faces.
pub struct MakeExtrudedPolygon {
    name: String,
    points: Vec<Point2>,
    half_length: f64,
}

impl MakeExtrudedPolygon {
    /// Creates a new `MakeExtrudedPolygon` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point2>, half_length: f64) -> Self {
        Self {
            name: name.into(),
            points,
            half_length,
        }
    }

    /// Executes the operation, adding the solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has fewer than 3 vertices, a vertex is
    /// not finite, or the length is invalid.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        check_half_length(&self.name, self.half_length)?;
        if self.points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "{}: extruded polygon needs at least 3 vertices, got {}",
                self.name,
                self.points.len()
            ))
            .into());
        }
        if self.points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "{}: non-finite polygon vertex",
                self.name
            ))
            .into());
        }
        Ok(store.add(
            self.name.clone(),
            SolidShape::ExtrudedPolygon {
                points: self.points.clone(),
                half_length: self.half_length,
            },
        ))
    }
}
