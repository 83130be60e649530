//! Turns a finished solid set into volumes and placements.

use crate::aperture::{ApertureSpec, ApertureType};
use crate::config::{BeamPipeConfig, Colour};
use crate::math::{Extent2D, Vector3};
use crate::solid::{SolidId, SolidStore};

use super::solids::SolidSet;
use super::BeamPipe;

/// Visualization attributes of a volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisAttributes {
    pub colour: Colour,
    pub visible: bool,
}

impl VisAttributes {
    /// Visible in `colour`.
    #[must_use]
    pub fn visible(colour: Colour) -> Self {
        Self { colour, visible: true }
    }

    /// Not drawn.
    #[must_use]
    pub fn invisible() -> Self {
        Self {
            colour: Colour::CONTAINER,
            visible: false,
        }
    }
}

/// Per-volume tracking limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLimits {
    pub max_step_length: f64,
}

/// Index of a volume within its [`BeamPipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeId(pub(crate) usize);

/// A solid with material and tracking attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalVolume {
    pub name: String,
    pub solid: SolidId,
    pub material: String,
    pub vis: VisAttributes,
    pub user_limits: Option<UserLimits>,
    pub sensitive: bool,
}

/// A daughter volume placed inside a mother volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub name: String,
    pub volume: VolumeId,
    pub mother: VolumeId,
    pub position: Vector3,
}

/// Cross-section properties the finaliser records on the result.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContainerInfo {
    pub extent: Extent2D,
    pub is_circular: bool,
    pub radius: f64,
}

/// Common last step of every construction.
///
/// Builds the container volume with the vacuum, wall and any extra volumes
/// placed inside it, then drops every solid the result does not reference.
pub(crate) struct FinaliseBeamPipe<'a> {
    name: &'a str,
    spec: &'a ApertureSpec,
    config: &'a BeamPipeConfig,
    solids: SolidSet,
    container: ContainerInfo,
}

impl<'a> FinaliseBeamPipe<'a> {
    pub(crate) fn new(
        name: &'a str,
        spec: &'a ApertureSpec,
        config: &'a BeamPipeConfig,
        solids: SolidSet,
        container: ContainerInfo,
    ) -> Self {
        Self {
            name,
            spec,
            config,
            solids,
            container,
        }
    }

    pub(crate) fn execute(self, mut store: SolidStore) -> BeamPipe {
        let Self {
            name,
            spec,
            config,
            solids,
            container,
        } = self;
        let limits = Some(UserLimits {
            max_step_length: spec.length * config.max_step_length_factor,
        });
        let mut volumes = Vec::new();
        let mut add = |volume: LogicalVolume| {
            volumes.push(volume);
            VolumeId(volumes.len() - 1)
        };

        let container_volume = add(LogicalVolume {
            name: format!("{name}_container_lv"),
            solid: solids.container,
            material: spec.vacuum_material.clone(),
            vis: if config.visible_containers {
                VisAttributes::visible(Colour::CONTAINER)
            } else {
                VisAttributes::invisible()
            },
            user_limits: None,
            sensitive: false,
        });
        let vacuum_volume = add(LogicalVolume {
            name: format!("{name}_vacuum_lv"),
            solid: solids.vacuum,
            material: spec.vacuum_material.clone(),
            vis: VisAttributes::invisible(),
            user_limits: limits,
            sensitive: config.sensitive_vacuum,
        });
        let pipe_volume = solids.pipe.map(|solid| {
            add(LogicalVolume {
                name: format!("{name}_beampipe_lv"),
                solid,
                material: spec.wall_material.clone(),
                vis: VisAttributes::visible(config.beam_pipe_colour),
                user_limits: limits,
                sensitive: config.sensitive_beam_pipe,
            })
        });
        let extra_volumes: Vec<(VolumeId, String, Vector3)> = solids
            .extras
            .iter()
            .map(|extra| {
                let id = add(LogicalVolume {
                    name: format!("{}_lv", extra.name),
                    solid: extra.solid,
                    material: extra.material.clone(),
                    vis: VisAttributes::visible(extra.colour),
                    user_limits: limits,
                    sensitive: config.sensitive_beam_pipe,
                });
                (id, extra.name.clone(), extra.position)
            })
            .collect();

        let place = |volume: VolumeId, label: String, position: Vector3| Placement {
            name: format!("{label}_pv"),
            volume,
            mother: container_volume,
            position,
        };
        let mut placements = vec![place(vacuum_volume, format!("{name}_vacuum"), Vector3::zeros())];
        if let Some(pipe) = pipe_volume {
            placements.push(place(pipe, format!("{name}_beampipe"), Vector3::zeros()));
        }
        placements.extend(
            extra_volumes
                .into_iter()
                .map(|(id, extra_name, position)| place(id, extra_name, position)),
        );

        let mut roots: Vec<SolidId> = volumes.iter().map(|v| v.solid).collect();
        roots.push(solids.container_subtraction);
        let removed = store.retain_reachable(&roots);
        tracing::trace!(element = name, removed, kept = store.len(), "pruned scratch solids");

        BeamPipe {
            name: name.to_owned(),
            shape: spec.shape,
            store,
            container_solid: solids.container,
            container_subtraction_solid: solids.container_subtraction,
            extent: container.extent.with_half_length(0.5 * spec.length),
            volumes,
            placements,
            container_volume,
            vacuum_volume,
            pipe_volume,
            container_is_circular: container.is_circular,
            container_radius: container.radius,
            sensitive_beam_pipe: config.sensitive_beam_pipe
                && spec.shape != ApertureType::CircularVacuum,
            sensitive_vacuum: config.sensitive_vacuum,
            store_aperture_impacts: config.store_aperture_impacts,
        }
    }
}
