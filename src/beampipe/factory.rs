use std::sync::Arc;

use crate::aperture::{ApertureShape, ApertureSpec, ApertureType, FaceNormals, Layer, Margins};
use crate::config::BeamPipeConfig;
use crate::error::{ConfigurationError, Result};
use crate::math::{Point2, Vector3};
use crate::pointfile::PointFileCache;
use crate::solid::SolidStore;

use super::angled::{check_faces, Ends};
use super::assembly::{ContainerInfo, FinaliseBeamPipe};
use super::lhc_detailed::{self, LhcDetailedLayout};
use super::solids::{self, SolidSet};
use super::BeamPipe;

/// Builds one beam-pipe segment.
///
/// Every call starts from an empty solid store and returns everything it
/// built inside the [`BeamPipe`], so nothing carries over between calls.
pub struct MakeBeamPipe<'a> {
    name: String,
    spec: &'a ApertureSpec,
    config: &'a BeamPipeConfig,
    points: Option<Arc<[Point2]>>,
}

impl<'a> MakeBeamPipe<'a> {
    /// Creates a new `MakeBeamPipe` operation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        spec: &'a ApertureSpec,
        config: &'a BeamPipeConfig,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            config,
            points: None,
        }
    }

    /// Supplies the outline of a points-file aperture, in millimetres.
    #[must_use]
    pub fn with_points(mut self, points: Arc<[Point2]>) -> Self {
        self.points = Some(points);
        self
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the wall is thinner than the
    /// minimum where that is checked, if angled faces would cross inside the
    /// segment, or if a points-file aperture has no points. Returns a
    /// geometry error if a primitive rejects its dimensions.
    pub fn execute(&self) -> Result<BeamPipe> {
        let name = self.name.as_str();
        let spec = self.spec;
        let config = self.config;
        self.check_thickness()?;

        let bare_vacuum = spec.shape == ApertureType::CircularVacuum;
        let thickness = if bare_vacuum { 0.0 } else { spec.thickness };
        let margins = Margins::new(config.length_safety_large, thickness);
        let mut store = SolidStore::new();

        let (solids, container, intersection_radius) = if spec.shape == ApertureType::LhcDetailed {
            let layout = LhcDetailedLayout::new(
                spec.aper1,
                spec.aper2,
                spec.aper3,
                spec.thickness,
                config,
            );
            let radius = layout.intersection_radius();
            self.check_angled_faces(radius)?;
            let ends = Ends::new(&mut store, name, spec, config, radius)?;
            let solids = lhc_detailed::build(&mut store, name, spec, config, &layout, &ends)?;
            let container = ContainerInfo {
                extent: layout.extent(),
                is_circular: true,
                radius: layout.container_radius,
            };
            (solids, container, radius)
        } else {
            let shape = ApertureShape::resolve(
                spec,
                margins,
                config.points_per_full_turn,
                self.points.as_deref(),
            )?;
            let radius = shape.intersection_radius(margins);
            self.check_angled_faces(radius)?;
            let solids = self.build_solids(&mut store, &shape, margins, radius, !bare_vacuum)?;
            let container_radius = match shape {
                ApertureShape::Circle { radius } => radius + margins.offset(Layer::Container),
                _ => shape.layer_extent(Layer::Container, margins).enclosing_radius(),
            };
            let container = ContainerInfo {
                extent: shape.extent(margins),
                is_circular: shape.is_circular(),
                radius: container_radius,
            };
            (solids, container, radius)
        };

        tracing::debug!(
            element = name,
            shape = %spec.shape,
            angled = spec.is_angled(),
            intersection_radius,
            extent_x = container.extent.max_abs_x(),
            extent_y = container.extent.max_abs_y(),
            solids = store.len(),
            "built beam pipe"
        );
        Ok(FinaliseBeamPipe::new(name, spec, config, solids, container).execute(store))
    }

    fn build_solids(
        &self,
        store: &mut SolidStore,
        shape: &ApertureShape,
        margins: Margins,
        intersection_radius: f64,
        with_pipe: bool,
    ) -> Result<SolidSet> {
        let spec = self.spec;
        if let ApertureShape::Circle { radius } = shape {
            let faces = spec.is_angled().then_some((spec.faces.input, spec.faces.output));
            let ends = Ends::flat(spec.length, self.config.length_safety);
            solids::build_circular(store, &self.name, *radius, margins, &ends, faces, with_pipe)
        } else {
            let ends = Ends::new(store, &self.name, spec, self.config, intersection_radius)?;
            solids::build(store, &self.name, shape, margins, &ends)
        }
    }

    /// Rejects a wall thinner than the minimum for RectEllipse apertures,
    /// for angled segments and, if configured, for every shape.
    fn check_thickness(&self) -> std::result::Result<(), ConfigurationError> {
        let spec = self.spec;
        if spec.shape == ApertureType::CircularVacuum {
            return Ok(());
        }
        let checked = spec.shape == ApertureType::RectEllipse
            || spec.is_angled()
            || self.config.check_thickness_all_shapes;
        let minimum = self.config.minimum_thickness();
        if checked && spec.thickness < minimum {
            return Err(ConfigurationError::ThicknessTooSmall {
                element: self.name.clone(),
                shape: spec.shape.name(),
                thickness: spec.thickness,
                minimum,
            });
        }
        Ok(())
    }

    fn check_angled_faces(
        &self,
        intersection_radius: f64,
    ) -> std::result::Result<(), ConfigurationError> {
        if self.spec.is_angled() {
            check_faces(&self.name, self.spec.length, intersection_radius, &self.spec.faces)?;
        }
        Ok(())
    }
}

/// Entry point for building beam pipes with shared configuration and a
/// shared point-file cache.
///
/// Holds no per-call state, so one factory can serve many threads.
#[derive(Debug, Default)]
pub struct BeamPipeFactory {
    config: BeamPipeConfig,
    point_files: PointFileCache,
}

impl BeamPipeFactory {
    /// Creates a factory with the given configuration.
    #[must_use]
    pub fn new(config: BeamPipeConfig) -> Self {
        Self {
            config,
            point_files: PointFileCache::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BeamPipeConfig {
        &self.config
    }

    /// The cache used for points-file apertures.
    #[must_use]
    pub fn point_files(&self) -> &PointFileCache {
        &self.point_files
    }

    /// Builds the segment described by `spec`, with flat or angled faces as
    /// its face normals say.
    ///
    /// # Errors
    ///
    /// Returns an error if a points-file aperture names no file or the file
    /// cannot be loaded, or if construction fails.
    pub fn create_beam_pipe(&self, name: &str, spec: &ApertureSpec) -> Result<BeamPipe> {
        let mut op = MakeBeamPipe::new(name, spec, &self.config);
        if spec.shape == ApertureType::PointsFile {
            let file = spec.point_file.as_ref().ok_or_else(|| ConfigurationError::MissingPointFile {
                element: name.to_owned(),
            })?;
            op = op.with_points(self.point_files.load(&file.path, &file.unit)?);
        }
        op.execute()
    }

    /// Builds the segment described by `spec` with the given input and
    /// output face normals.
    ///
    /// # Errors
    ///
    /// As [`BeamPipeFactory::create_beam_pipe`].
    pub fn create_beam_pipe_angled(
        &self,
        name: &str,
        spec: &ApertureSpec,
        input_face_normal: Vector3,
        output_face_normal: Vector3,
    ) -> Result<BeamPipe> {
        let spec = spec
            .clone()
            .with_faces(FaceNormals::new(input_face_normal, output_face_normal));
        self.create_beam_pipe(name, &spec)
    }
}
