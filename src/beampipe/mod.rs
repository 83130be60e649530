//! Construction of complete beam-pipe segments.
//!
//! [`BeamPipeFactory`] dispatches an [`ApertureSpec`](crate::aperture::ApertureSpec)
//! to the matching cross-section, assembles the straight or angled solids
//! and packages them, with their volumes and placements, as a [`BeamPipe`].

mod angled;
mod assembly;
mod factory;
mod lhc_detailed;
mod solids;

pub use angled::{check_faces, long_length};
pub use assembly::{LogicalVolume, Placement, UserLimits, VisAttributes, VolumeId};
pub use factory::{BeamPipeFactory, MakeBeamPipe};
pub use lhc_detailed::LhcDetailedLayout;
pub use solids::{ExtraSolid, SolidSet};

use crate::aperture::ApertureType;
use crate::math::Extent3D;
use crate::solid::{SolidId, SolidStore};

/// A finished beam-pipe segment.
///
/// Owns the solids it references. The container volume is the outermost
/// volume; everything else is placed inside it at the origin, apart from
/// off-axis extras such as cooling pipes.
#[derive(Debug)]
pub struct BeamPipe {
    name: String,
    shape: ApertureType,
    store: SolidStore,
    container_solid: SolidId,
    container_subtraction_solid: SolidId,
    extent: Extent3D,
    volumes: Vec<LogicalVolume>,
    placements: Vec<Placement>,
    container_volume: VolumeId,
    vacuum_volume: VolumeId,
    pipe_volume: Option<VolumeId>,
    container_is_circular: bool,
    container_radius: f64,
    sensitive_beam_pipe: bool,
    sensitive_vacuum: bool,
    store_aperture_impacts: bool,
}

impl BeamPipe {
    /// Element name the segment was built for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aperture family the segment was built from.
    #[must_use]
    pub fn shape(&self) -> ApertureType {
        self.shape
    }

    /// The solids of this segment.
    #[must_use]
    pub fn store(&self) -> &SolidStore {
        &self.store
    }

    #[must_use]
    pub fn container_solid(&self) -> SolidId {
        self.container_solid
    }

    /// Flat-ended solid for subtracting this segment from neighbours. Never
    /// placed.
    #[must_use]
    pub fn container_subtraction_solid(&self) -> SolidId {
        self.container_subtraction_solid
    }

    /// Extent of the container subtraction, with the segment's half-length
    /// along z.
    #[must_use]
    pub fn extent(&self) -> Extent3D {
        self.extent
    }

    #[must_use]
    pub fn volumes(&self) -> &[LogicalVolume] {
        &self.volumes
    }

    /// Returns a volume by id.
    #[must_use]
    pub fn volume(&self, id: VolumeId) -> Option<&LogicalVolume> {
        self.volumes.get(id.0)
    }

    /// Returns the first volume with the given name.
    #[must_use]
    pub fn volume_by_name(&self, name: &str) -> Option<&LogicalVolume> {
        self.volumes.iter().find(|v| v.name == name)
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn container_volume(&self) -> VolumeId {
        self.container_volume
    }

    #[must_use]
    pub fn vacuum_volume(&self) -> VolumeId {
        self.vacuum_volume
    }

    /// The wall volume; `None` for a bare vacuum tube.
    #[must_use]
    pub fn pipe_volume(&self) -> Option<VolumeId> {
        self.pipe_volume
    }

    /// Whether the container is a cylinder of [`BeamPipe::container_radius`].
    #[must_use]
    pub fn container_is_circular(&self) -> bool {
        self.container_is_circular
    }

    /// Container radius, or the radius enclosing a non-circular container.
    #[must_use]
    pub fn container_radius(&self) -> f64 {
        self.container_radius
    }

    #[must_use]
    pub fn sensitive_beam_pipe(&self) -> bool {
        self.sensitive_beam_pipe
    }

    #[must_use]
    pub fn sensitive_vacuum(&self) -> bool {
        self.sensitive_vacuum
    }

    #[must_use]
    pub fn store_aperture_impacts(&self) -> bool {
        self.store_aperture_impacts
    }
}
