//! Angled end faces.
//!
//! Tilted segments are built over-long and then intersected with one shared
//! cut cylinder whose faces carry the requested normals, so vacuum, wall and
//! container end on the same two planes.

use crate::aperture::{ApertureSpec, FaceNormals};
use crate::config::BeamPipeConfig;
use crate::error::{ConfigurationError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::solid::{Intersect, MakeCutTubs, SolidId, SolidStore};

/// Largest transverse slope `|n.xy| / |n.z|` of the two faces.
fn max_slope(faces: &FaceNormals) -> f64 {
    let slope = |n: &Vector3| n.xy().norm() / n.z.abs().max(TOLERANCE);
    slope(&faces.input).max(slope(&faces.output))
}

/// Full length of the over-long solids that are cut by the angled faces.
///
/// Far enough beyond both faces that a face tilted by the steeper of the two
/// normals never reaches the flat ends within `radius`, plus `safety` at
/// each end.
#[must_use]
pub fn long_length(length: f64, radius: f64, faces: &FaceNormals, safety: f64) -> f64 {
    length + 2.0 * (radius * max_slope(faces) + safety)
}

/// Checks that the face normals point out of the segment and that the two
/// face planes do not meet within `radius` of the axis.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidFaceNormal`] for a normal pointing
/// the wrong way along z and [`ConfigurationError::FacesIntersect`] when the
/// faces would cross inside the solid.
pub fn check_faces(
    element: &str,
    length: f64,
    radius: f64,
    faces: &FaceNormals,
) -> std::result::Result<(), ConfigurationError> {
    let wrong_way = |face: &'static str, n: &Vector3| ConfigurationError::InvalidFaceNormal {
        element: element.to_owned(),
        face,
        x: n.x,
        y: n.y,
        z: n.z,
    };
    if faces.input.z >= -TOLERANCE {
        return Err(wrong_way("input", &faces.input));
    }
    if faces.output.z <= TOLERANCE {
        return Err(wrong_way("output", &faces.output));
    }

    // Face separation at transverse position p is length - gradient.p.
    let gradient = faces.output.xy() / faces.output.z - faces.input.xy() / faces.input.z;
    let shrink = radius * gradient.norm();
    if shrink >= length {
        return Err(ConfigurationError::FacesIntersect {
            element: element.to_owned(),
            length,
            radius,
            shrink,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Cutter {
    solid: SolidId,
    half_long: f64,
}

/// Longitudinal layout of one segment: flat, or over-long and cut by a
/// shared angled-face solid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ends {
    half_length: f64,
    length_safety: f64,
    cutter: Option<Cutter>,
}

impl Ends {
    /// Flat ends, or angled ends with the cutter added to `store` when the
    /// spec's faces are tilted.
    pub(crate) fn new(
        store: &mut SolidStore,
        name: &str,
        spec: &ApertureSpec,
        config: &BeamPipeConfig,
        intersection_radius: f64,
    ) -> Result<Self> {
        let half_length = 0.5 * spec.length;
        let cutter = if spec.is_angled() {
            let solid = MakeCutTubs::new(
                format!("{name}_angled_face"),
                0.0,
                intersection_radius,
                half_length - config.length_safety,
                spec.faces.input,
                spec.faces.output,
            )
            .execute(store)?;
            let half_long = 0.5
                * long_length(
                    spec.length,
                    intersection_radius,
                    &spec.faces,
                    config.length_safety_large,
                );
            Some(Cutter { solid, half_long })
        } else {
            None
        };
        Ok(Self {
            half_length,
            length_safety: config.length_safety,
            cutter,
        })
    }

    /// Flat ends for a segment of `length`.
    pub(crate) fn flat(length: f64, length_safety: f64) -> Self {
        Self {
            half_length: 0.5 * length,
            length_safety,
            cutter: None,
        }
    }

    /// Whether the ends are tilted.
    pub(crate) fn is_angled(&self) -> bool {
        self.cutter.is_some()
    }

    /// Half-length of the vacuum, wall and other placed bodies.
    pub(crate) fn body(&self) -> f64 {
        self.cutter.map_or(self.half_length - self.length_safety, |c| c.half_long)
    }

    /// Half-length of a solid subtracted from a body; longer so no faces
    /// coincide.
    pub(crate) fn subtrahend(&self) -> f64 {
        self.cutter.map_or(2.0 * self.half_length, |c| 2.0 * c.half_long)
    }

    /// Half-length of the container.
    pub(crate) fn container(&self) -> f64 {
        self.cutter.map_or(self.half_length, |c| c.half_long)
    }

    /// Half-length of the container-subtraction solid, which always keeps
    /// flat ends.
    pub(crate) fn container_subtraction(&self) -> f64 {
        2.0 * self.half_length
    }

    /// Name for a body that [`Ends::cut`] will turn into `name`.
    pub(crate) fn body_name(&self, name: &str) -> String {
        if self.is_angled() {
            format!("{name}_long")
        } else {
            name.to_owned()
        }
    }

    /// Intersects `body` with the face cutter. `offset` places the cutter
    /// relative to the body's own frame. Flat ends return `body` unchanged.
    pub(crate) fn cut(
        &self,
        store: &mut SolidStore,
        name: &str,
        body: SolidId,
        offset: Vector3,
    ) -> Result<SolidId> {
        match self.cutter {
            Some(c) => Intersect::new(name, body, c.solid).with_offset(offset).execute(store),
            None => Ok(body),
        }
    }
}
