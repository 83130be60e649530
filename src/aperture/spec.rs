use crate::error::ConfigurationError;
use crate::math::{Vector3, TOLERANCE};
use crate::pointfile::DEFAULT_UNIT;

use super::kind::{ApertureType, POINTS_FILE_PREFIX};

/// Reference to an external aperture point file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointFileRef {
    /// Path of the two-column text file.
    pub path: String,
    /// Unit the file's values are expressed in.
    pub unit: String,
}

impl PointFileRef {
    /// Creates a new point-file reference.
    #[must_use]
    pub fn new(path: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            unit: unit.into(),
        }
    }

    /// Parses the compound `pointsfile:<path>[:<unit>]` form.
    ///
    /// Returns `None` if `s` does not start with the `pointsfile:` prefix or
    /// names no path. Without an explicit unit the file is read in metres.
    /// A trailing bare word is always taken as the unit, so an unknown unit
    /// is reported when the file is loaded rather than folded into the path.
    #[must_use]
    pub fn parse_compound(s: &str) -> Option<Self> {
        let (head, rest) = s.trim().split_once(':')?;
        if !head.eq_ignore_ascii_case(POINTS_FILE_PREFIX) || rest.is_empty() {
            return None;
        }
        match rest.rsplit_once(':') {
            Some((path, unit)) if !path.is_empty() && is_unit_word(unit) => {
                Some(Self::new(path, unit))
            }
            _ => Some(Self::new(rest, DEFAULT_UNIT)),
        }
    }
}

/// Whether the last `:` field of a compound name reads as a unit rather than
/// the tail of a path such as `C:/apertures/lhc.dat`.
fn is_unit_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Unit normals of the two end faces of a segment.
///
/// The input face normal points backwards along z, the output face normal
/// forwards. Flat faces use the pure longitudinal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceNormals {
    pub input: Vector3,
    pub output: Vector3,
}

impl Default for FaceNormals {
    fn default() -> Self {
        Self {
            input: -Vector3::z(),
            output: Vector3::z(),
        }
    }
}

impl FaceNormals {
    /// Creates face normals from explicit vectors.
    #[must_use]
    pub fn new(input: Vector3, output: Vector3) -> Self {
        Self { input, output }
    }

    /// Face normals rotated about the vertical axis by the given angles
    /// (radians). Positive angles tilt both faces towards +x at the rear of
    /// the face, as for the pole faces of a sector bend.
    #[must_use]
    pub fn from_angles(input_angle: f64, output_angle: f64) -> Self {
        Self {
            input: Vector3::new(input_angle.sin(), 0.0, -input_angle.cos()),
            output: Vector3::new(output_angle.sin(), 0.0, output_angle.cos()),
        }
    }

    /// Whether both faces are perpendicular to the longitudinal axis.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        let flat = Self::default();
        (self.input.normalize() - flat.input).norm() < TOLERANCE
            && (self.output.normalize() - flat.output).norm() < TOLERANCE
    }
}

/// Everything needed to build one beam-pipe segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApertureSpec {
    pub shape: ApertureType,
    pub aper1: f64,
    pub aper2: f64,
    pub aper3: f64,
    pub aper4: f64,
    /// Beam-pipe wall thickness.
    pub thickness: f64,
    /// Segment length along z.
    pub length: f64,
    pub vacuum_material: String,
    pub wall_material: String,
    pub point_file: Option<PointFileRef>,
    pub faces: FaceNormals,
}

impl ApertureSpec {
    /// Creates a specification with zero aperture parameters, a 1 mm
    /// stainless-steel wall and flat faces.
    #[must_use]
    pub fn new(shape: ApertureType, length: f64) -> Self {
        Self {
            shape,
            aper1: 0.0,
            aper2: 0.0,
            aper3: 0.0,
            aper4: 0.0,
            thickness: 1.0,
            length,
            vacuum_material: "vacuum".to_owned(),
            wall_material: "stainlesssteel".to_owned(),
            point_file: None,
            faces: FaceNormals::default(),
        }
    }

    /// Creates a specification from a type string as written in a lattice
    /// file. Unknown names fall back to circular; the compound
    /// `pointsfile:<path>[:<unit>]` form also sets the point file.
    #[must_use]
    pub fn from_type_name(name: &str, length: f64) -> Self {
        let mut spec = Self::new(ApertureType::from_name_or_default(name), length);
        spec.point_file = PointFileRef::parse_compound(name);
        spec
    }

    /// Sets the four aperture parameters.
    #[must_use]
    pub fn with_aperture(mut self, aper1: f64, aper2: f64, aper3: f64, aper4: f64) -> Self {
        self.aper1 = aper1;
        self.aper2 = aper2;
        self.aper3 = aper3;
        self.aper4 = aper4;
        self
    }

    /// Sets the wall thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the vacuum and wall materials.
    #[must_use]
    pub fn with_materials(mut self, vacuum: impl Into<String>, wall: impl Into<String>) -> Self {
        self.vacuum_material = vacuum.into();
        self.wall_material = wall.into();
        self
    }

    /// Sets the external point file.
    #[must_use]
    pub fn with_point_file(mut self, point_file: PointFileRef) -> Self {
        self.point_file = Some(point_file);
        self
    }

    /// Sets the end-face normals.
    #[must_use]
    pub fn with_faces(mut self, faces: FaceNormals) -> Self {
        self.faces = faces;
        self
    }

    /// The aperture parameters as an array.
    #[must_use]
    pub fn parameters(&self) -> [f64; 4] {
        [self.aper1, self.aper2, self.aper3, self.aper4]
    }

    /// Whether either end face is tilted.
    #[must_use]
    pub fn is_angled(&self) -> bool {
        !self.faces.is_flat()
    }

    /// Checks that the parameters make sense for the shape.
    ///
    /// Construction does not call this: nonsensical parameters there produce
    /// degenerate geometry rather than an error. Callers that want to reject
    /// such input up front use this check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidAperture`] describing the first
    /// violated constraint.
    pub fn check(&self) -> Result<(), ConfigurationError> {
        let shape = self.shape.name();
        let invalid = |reason: String| Err(ConfigurationError::InvalidAperture { shape, reason });

        for (i, v) in self.parameters().iter().enumerate() {
            if !v.is_finite() || *v < 0.0 {
                return invalid(format!("aper{} = {v} must be non-negative", i + 1));
            }
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return invalid(format!("thickness {} must be non-negative", self.thickness));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return invalid(format!("length {} must be positive", self.length));
        }

        let [a1, a2, a3, a4] = self.parameters();
        let required: Vec<usize> = match self.shape {
            ApertureType::RaceTrack => vec![3],
            ApertureType::ClicPcl => vec![1, 2, 3],
            ApertureType::Rhombus => vec![1, 2],
            other => (1..=other.parameter_count()).collect(),
        };
        for i in required {
            if self.parameters()[i - 1] <= 0.0 {
                return invalid(format!("aper{i} must be positive"));
            }
        }

        match self.shape {
            ApertureType::Octagonal if a3 >= a1 || a4 >= a2 => {
                invalid(format!(
                    "aper3 ({a3}) must be < aper1 ({a1}) and aper4 ({a4}) < aper2 ({a2})"
                ))
            }
            ApertureType::Rhombus if a3 > 0.0 => {
                let alpha = a1.atan2(a2);
                if a3 / alpha.sin() > a2 || a3 / alpha.cos() > a1 {
                    invalid(format!(
                        "corner radius aper3 ({a3}) is too large for a {a1} x {a2} rhombus"
                    ))
                } else {
                    Ok(())
                }
            }
            ApertureType::PointsFile if self.point_file.is_none() => {
                invalid("no point file given".to_owned())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_are_flat() {
        assert!(FaceNormals::default().is_flat());
        assert!(FaceNormals::from_angles(0.0, 0.0).is_flat());
        assert!(!FaceNormals::from_angles(0.1, 0.0).is_flat());
    }

    #[test]
    fn tilted_normals_keep_z_sign() {
        let faces = FaceNormals::from_angles(0.3, -0.3);
        assert!(faces.input.z < 0.0);
        assert!(faces.output.z > 0.0);
        assert!((faces.input.norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn compound_point_file_with_unit() {
        let r = PointFileRef::parse_compound("pointsfile:data/aper.dat:mm").unwrap();
        assert_eq!(r, PointFileRef::new("data/aper.dat", "mm"));
    }

    #[test]
    fn compound_point_file_without_unit() {
        let r = PointFileRef::parse_compound("POINTSFILE:aper.dat").unwrap();
        assert_eq!(r, PointFileRef::new("aper.dat", "m"));
        assert!(PointFileRef::parse_compound("circular").is_none());
        assert!(PointFileRef::parse_compound("pointsfile:").is_none());
    }

    #[test]
    fn compound_point_file_keeps_unknown_unit() {
        let r = PointFileRef::parse_compound("pointsfile:aper.dat:inch").unwrap();
        assert_eq!(r, PointFileRef::new("aper.dat", "inch"));
    }

    #[test]
    fn compound_point_file_with_drive_letter() {
        let r = PointFileRef::parse_compound("pointsfile:C:/apertures/lhc.dat").unwrap();
        assert_eq!(r, PointFileRef::new("C:/apertures/lhc.dat", "m"));
        let r = PointFileRef::parse_compound("pointsfile:C:/apertures/lhc.dat:mm").unwrap();
        assert_eq!(r, PointFileRef::new("C:/apertures/lhc.dat", "mm"));
    }

    #[test]
    fn from_type_name_sets_point_file() {
        let spec = ApertureSpec::from_type_name("pointsfile:aper.dat:cm", 100.0);
        assert_eq!(spec.shape, ApertureType::PointsFile);
        assert_eq!(spec.point_file, Some(PointFileRef::new("aper.dat", "cm")));
    }

    #[test]
    fn from_type_name_unknown_is_circular() {
        let spec = ApertureSpec::from_type_name("triangle", 100.0);
        assert_eq!(spec.shape, ApertureType::Circular);
        assert!(spec.point_file.is_none());
    }

    #[test]
    fn check_accepts_valid_octagon() {
        let spec = ApertureSpec::new(ApertureType::Octagonal, 1000.0)
            .with_aperture(30.0, 25.0, 20.0, 15.0);
        assert!(spec.check().is_ok());
    }

    #[test]
    fn check_rejects_inverted_octagon() {
        let spec = ApertureSpec::new(ApertureType::Octagonal, 1000.0)
            .with_aperture(30.0, 25.0, 35.0, 15.0);
        assert!(spec.check().is_err());
    }

    #[test]
    fn check_rejects_missing_parameter() {
        let spec = ApertureSpec::new(ApertureType::Elliptical, 1000.0)
            .with_aperture(30.0, 0.0, 0.0, 0.0);
        assert!(spec.check().is_err());
        let spec = ApertureSpec::new(ApertureType::RaceTrack, 1000.0)
            .with_aperture(0.0, 0.0, 10.0, 0.0);
        assert!(spec.check().is_ok());
    }

    #[test]
    fn check_rejects_negative_values() {
        let spec = ApertureSpec::new(ApertureType::Circular, 1000.0)
            .with_aperture(-1.0, 0.0, 0.0, 0.0);
        assert!(spec.check().is_err());
    }

    #[test]
    fn check_rhombus_corner_radius() {
        let ok = ApertureSpec::new(ApertureType::Rhombus, 10.0).with_aperture(30.0, 20.0, 2.0, 0.0);
        assert!(ok.check().is_ok());
        let too_big = ApertureSpec::new(ApertureType::Rhombus, 10.0)
            .with_aperture(30.0, 20.0, 25.0, 0.0);
        assert!(too_big.check().is_err());
    }

    #[test]
    fn check_points_file_needs_file() {
        let spec = ApertureSpec::new(ApertureType::PointsFile, 10.0);
        assert!(spec.check().is_err());
        let spec = spec.with_point_file(PointFileRef::new("a.dat", "mm"));
        assert!(spec.check().is_ok());
    }
}
