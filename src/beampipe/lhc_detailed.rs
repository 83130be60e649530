//! The detailed LHC beam screen.
//!
//! Around the LHC vacuum sit, from the inside out: a thin copper skin, the
//! beam screen itself (the wall, `thickness` thick), two cooling pipes
//! resting on the screen's flats and the circular cold bore. Every layer
//! keeps `length_safety_large` clear of its neighbours.

use crate::aperture::shapes::lhc;
use crate::aperture::ApertureSpec;
use crate::config::{BeamPipeConfig, Colour};
use crate::error::Result;
use crate::math::{Extent2D, Vector3};
use crate::solid::{MakeTubs, SolidId, SolidStore, Subtract};

use super::angled::Ends;
use super::solids::{ExtraSolid, SolidSet};

/// Radii and offsets of the detailed assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct LhcDetailedLayout {
    /// The flats are at ±x rather than ±y.
    pub vertical_orientation: bool,
    /// Half-extent of the vacuum across the flats.
    pub flat: f64,
    /// Offsets from the vacuum edge of the copper skin's inner and outer
    /// surfaces.
    pub copper: [f64; 2],
    /// Offsets from the vacuum edge of the beam screen's inner and outer
    /// surfaces.
    pub screen: [f64; 2],
    /// Distance of each cooling pipe centre from the axis, if the pipes fit.
    pub cooling_pipe_offset: Option<f64>,
    pub cold_bore_inner_radius: f64,
    pub cold_bore_outer_radius: f64,
    pub container_radius: f64,
    pub container_subtraction_radius: f64,
}

impl LhcDetailedLayout {
    /// Computes the layout for LHC aperture parameters `aper1..aper3` and a
    /// beam-screen `thickness`.
    #[must_use]
    pub fn new(
        aper1: f64,
        aper2: f64,
        aper3: f64,
        thickness: f64,
        config: &BeamPipeConfig,
    ) -> Self {
        let m = config.length_safety_large;
        let lhc_config = &config.lhc;
        let vertical_orientation = aper1 < aper2;
        let flat = (if vertical_orientation { aper1 } else { aper2 }).min(aper3);

        let copper = [m, m + lhc_config.copper_skin_thickness];
        let screen = [copper[1] + m, copper[1] + m + thickness];
        let screen_radius = aper3 + screen[1];

        let pipe_outer = lhc_config.cooling_pipe_radius + lhc_config.cooling_pipe_thickness;
        let centre = flat + screen[1] + m + pipe_outer;
        let cooling_pipe_offset = if centre + pipe_outer <= screen_radius {
            Some(centre)
        } else {
            tracing::warn!(
                flat,
                screen_radius,
                "no room for cooling pipes between beam screen and cold bore, omitting them"
            );
            None
        };

        let cold_bore_inner_radius = screen_radius + m;
        let cold_bore_outer_radius = cold_bore_inner_radius + lhc_config.cold_bore_thickness;
        Self {
            vertical_orientation,
            flat,
            copper,
            screen,
            cooling_pipe_offset,
            cold_bore_inner_radius,
            cold_bore_outer_radius,
            container_radius: cold_bore_outer_radius + m,
            container_subtraction_radius: cold_bore_outer_radius + 2.0 * m,
        }
    }

    /// Cutter radius: the container-subtraction radius plus one percent.
    #[must_use]
    pub fn intersection_radius(&self) -> f64 {
        self.container_subtraction_radius * 1.01
    }

    /// Extent of the circular container subtraction.
    #[must_use]
    pub fn extent(&self) -> Extent2D {
        Extent2D::symmetric(self.container_subtraction_radius, self.container_subtraction_radius)
    }

    /// Centres of the two cooling pipes, if they fit.
    #[must_use]
    pub fn cooling_pipe_centres(&self) -> Option<[Vector3; 2]> {
        self.cooling_pipe_offset.map(|c| {
            if self.vertical_orientation {
                [Vector3::new(c, 0.0, 0.0), Vector3::new(-c, 0.0, 0.0)]
            } else {
                [Vector3::new(0.0, c, 0.0), Vector3::new(0.0, -c, 0.0)]
            }
        })
    }
}

/// LHC-shaped shell between two offsets from the vacuum edge.
fn shell(
    store: &mut SolidStore,
    name: &str,
    [a1, a2, a3]: [f64; 3],
    [inner, outer]: [f64; 2],
    ends: &Ends,
) -> Result<SolidId> {
    let outer_solid = lhc::make_solid(
        store,
        &format!("{name}_outer"),
        a1 + outer,
        a2 + outer,
        a3 + outer,
        ends.body(),
    )?;
    let inner_solid = lhc::make_solid(
        store,
        &format!("{name}_inner"),
        a1 + inner,
        a2 + inner,
        a3 + inner,
        ends.subtrahend(),
    )?;
    let body = Subtract::new(ends.body_name(name), outer_solid, inner_solid).execute(store)?;
    ends.cut(store, name, body, Vector3::zeros())
}

/// Builds every solid of the detailed assembly.
pub(crate) fn build(
    store: &mut SolidStore,
    name: &str,
    spec: &ApertureSpec,
    config: &BeamPipeConfig,
    layout: &LhcDetailedLayout,
    ends: &Ends,
) -> Result<SolidSet> {
    let aper = [spec.aper1, spec.aper2, spec.aper3];
    let lhc_config = &config.lhc;

    let vacuum_name = format!("{name}_vacuum");
    let vacuum_body = lhc::make_solid(
        store,
        &ends.body_name(&vacuum_name),
        aper[0],
        aper[1],
        aper[2],
        ends.body(),
    )?;
    let vacuum = ends.cut(store, &vacuum_name, vacuum_body, Vector3::zeros())?;

    let copper_name = format!("{name}_copper_skin");
    let copper = shell(store, &copper_name, aper, layout.copper, ends)?;
    let screen = shell(store, &format!("{name}_beam_screen"), aper, layout.screen, ends)?;

    let mut extras = vec![ExtraSolid {
        name: copper_name,
        solid: copper,
        material: lhc_config.copper_material.to_owned(),
        colour: Colour::COPPER,
        position: Vector3::zeros(),
    }];

    if let Some(centres) = layout.cooling_pipe_centres() {
        let pipe_outer = lhc_config.cooling_pipe_radius + lhc_config.cooling_pipe_thickness;
        for (i, centre) in centres.into_iter().enumerate() {
            let pipe_name = format!("{name}_cooling_pipe_{i}");
            let body = MakeTubs::new(
                ends.body_name(&pipe_name),
                lhc_config.cooling_pipe_radius,
                pipe_outer,
                ends.body(),
            )
            .execute(store)?;
            let solid = ends.cut(store, &pipe_name, body, -centre)?;
            extras.push(ExtraSolid {
                name: pipe_name,
                solid,
                material: lhc_config.cold_bore_material.to_owned(),
                colour: Colour::COOLING_PIPE,
                position: centre,
            });
        }
    }

    let cold_bore_name = format!("{name}_cold_bore");
    let cold_bore_body = MakeTubs::new(
        ends.body_name(&cold_bore_name),
        layout.cold_bore_inner_radius,
        layout.cold_bore_outer_radius,
        ends.body(),
    )
    .execute(store)?;
    extras.push(ExtraSolid {
        name: cold_bore_name.clone(),
        solid: ends.cut(store, &cold_bore_name, cold_bore_body, Vector3::zeros())?,
        material: lhc_config.cold_bore_material.to_owned(),
        colour: Colour::COLD_BORE,
        position: Vector3::zeros(),
    });

    let container_name = format!("{name}_container");
    let container_body = MakeTubs::new(
        ends.body_name(&container_name),
        0.0,
        layout.container_radius,
        ends.container(),
    )
    .execute(store)?;
    let container = ends.cut(store, &container_name, container_body, Vector3::zeros())?;
    let container_subtraction = MakeTubs::new(
        format!("{name}_container_subtraction"),
        0.0,
        layout.container_subtraction_radius,
        ends.container_subtraction(),
    )
    .execute(store)?;

    Ok(SolidSet {
        vacuum,
        pipe: Some(screen),
        container,
        container_subtraction,
        extras,
    })
}
