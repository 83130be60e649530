//! Assembly of the vacuum, wall and container solids of one segment.

use crate::aperture::{ApertureShape, Layer, Margins};
use crate::config::Colour;
use crate::error::Result;
use crate::math::Vector3;
use crate::solid::{MakeCutTubs, MakeTubs, SolidId, SolidStore, Subtract};

use super::angled::Ends;

/// An additional placed solid, such as the parts of the detailed LHC beam
/// screen.
#[derive(Debug, Clone)]
pub struct ExtraSolid {
    pub name: String,
    pub solid: SolidId,
    pub material: String,
    pub colour: Colour,
    /// Position in the container frame.
    pub position: Vector3,
}

/// The solids handed to the finaliser.
#[derive(Debug, Clone)]
pub struct SolidSet {
    pub vacuum: SolidId,
    /// Beam-pipe wall, absent for a bare vacuum tube.
    pub pipe: Option<SolidId>,
    pub container: SolidId,
    pub container_subtraction: SolidId,
    pub extras: Vec<ExtraSolid>,
}

/// Builds the solid set of any non-circular cross-section.
///
/// The wall is the outer body minus a longer inner body. With angled ends
/// every placed solid is built over-long and cut by the shared face solid;
/// the container subtraction always stays flat.
pub(crate) fn build(
    store: &mut SolidStore,
    name: &str,
    shape: &ApertureShape,
    margins: Margins,
    ends: &Ends,
) -> Result<SolidSet> {
    let vacuum_name = format!("{name}_vacuum");
    let vacuum_body = shape.make_solid(
        store,
        &ends.body_name(&vacuum_name),
        Layer::Vacuum,
        margins,
        ends.body(),
    )?;
    let vacuum = ends.cut(store, &vacuum_name, vacuum_body, Vector3::zeros())?;

    let inner = shape.make_solid(
        store,
        &format!("{name}_pipe_inner"),
        Layer::PipeInner,
        margins,
        ends.subtrahend(),
    )?;
    let outer = shape.make_solid(
        store,
        &format!("{name}_pipe_outer"),
        Layer::PipeOuter,
        margins,
        ends.body(),
    )?;
    let pipe_name = format!("{name}_pipe");
    let pipe_body = Subtract::new(ends.body_name(&pipe_name), outer, inner).execute(store)?;
    let pipe = ends.cut(store, &pipe_name, pipe_body, Vector3::zeros())?;

    let container_name = format!("{name}_container");
    let container_body = shape.make_solid(
        store,
        &ends.body_name(&container_name),
        Layer::Container,
        margins,
        ends.container(),
    )?;
    let container = ends.cut(store, &container_name, container_body, Vector3::zeros())?;

    let container_subtraction = shape.make_solid(
        store,
        &format!("{name}_container_subtraction"),
        Layer::ContainerSubtraction,
        margins,
        ends.container_subtraction(),
    )?;

    Ok(SolidSet {
        vacuum,
        pipe: Some(pipe),
        container,
        container_subtraction,
        extras: Vec::new(),
    })
}

/// Builds the solid set of a circular cross-section from cylinders.
///
/// `ends` must be flat: tilted `faces` are applied by cut cylinders of the
/// true length directly instead of a shared cutter. The
/// straight wall is a single annulus; the angled wall is an outer cut
/// cylinder minus a slightly longer inner one. Without `with_pipe` only the
/// vacuum and containers are built.
pub(crate) fn build_circular(
    store: &mut SolidStore,
    name: &str,
    radius: f64,
    margins: Margins,
    ends: &Ends,
    faces: Option<(Vector3, Vector3)>,
    with_pipe: bool,
) -> Result<SolidSet> {
    let r = |layer| radius + margins.offset(layer);
    let body = ends.body();
    let container_half = ends.container();

    let tube = |store: &mut SolidStore, name: String, inner: f64, outer: f64, half_length: f64| {
        match faces {
            Some((input, output)) => {
                MakeCutTubs::new(name, inner, outer, half_length, input, output).execute(store)
            }
            None => MakeTubs::new(name, inner, outer, half_length).execute(store),
        }
    };

    let vacuum = tube(store, format!("{name}_vacuum"), 0.0, r(Layer::Vacuum), body)?;
    let pipe = if with_pipe {
        let pipe_name = format!("{name}_pipe");
        Some(if faces.is_some() {
            let outer = tube(store, format!("{name}_pipe_outer"), 0.0, r(Layer::PipeOuter), body)?;
            let inner = tube(
                store,
                format!("{name}_pipe_inner"),
                0.0,
                r(Layer::PipeInner),
                body + margins.safety,
            )?;
            Subtract::new(pipe_name, outer, inner).execute(store)?
        } else {
            tube(store, pipe_name, r(Layer::PipeInner), r(Layer::PipeOuter), body)?
        })
    } else {
        None
    };
    let container = tube(
        store,
        format!("{name}_container"),
        0.0,
        r(Layer::Container),
        container_half,
    )?;
    let container_subtraction = MakeTubs::new(
        format!("{name}_container_subtraction"),
        0.0,
        r(Layer::ContainerSubtraction),
        ends.container_subtraction(),
    )
    .execute(store)?;

    Ok(SolidSet {
        vacuum,
        pipe,
        container,
        container_subtraction,
        extras: Vec::new(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::aperture::{ApertureSpec, ApertureType};
    use crate::config::BeamPipeConfig;
    use crate::math::Point3;

    fn margins() -> Margins {
        Margins::new(1e-3, 1.0)
    }

    #[test]
    fn rectangular_wall_is_hollow() {
        let mut store = SolidStore::new();
        let spec = ApertureSpec::new(ApertureType::Rectangular, 100.0)
            .with_aperture(10.0, 5.0, 0.0, 0.0);
        let shape = ApertureShape::resolve(&spec, margins(), 40, None).unwrap();
        let ends = Ends::new(&mut store, "r", &spec, &BeamPipeConfig::default(), 20.0).unwrap();
        let set = build(&mut store, "r", &shape, margins(), &ends).unwrap();
        let pipe = set.pipe.unwrap();
        assert!(store.contains(set.vacuum, &Point3::new(9.0, 0.0, 0.0)).unwrap());
        assert!(!store.contains(pipe, &Point3::new(9.0, 0.0, 0.0)).unwrap());
        assert!(store.contains(pipe, &Point3::new(10.5, 0.0, 0.0)).unwrap());
        assert!(store.contains(set.container, &Point3::new(10.5, 0.0, 49.9)).unwrap());
        assert!(!store.contains(set.vacuum, &Point3::new(0.0, 0.0, 50.0)).unwrap());
    }

    #[test]
    fn circular_straight_wall_is_annulus() {
        let mut store = SolidStore::new();
        let ends = Ends::flat(100.0, 1e-6);
        let set = build_circular(&mut store, "c", 10.0, margins(), &ends, None, true).unwrap();
        let pipe = set.pipe.unwrap();
        assert!(matches!(
            store.solid(pipe).unwrap().shape,
            crate::solid::SolidShape::Tubs { inner_radius, .. } if inner_radius > 10.0
        ));
        // Vacuum, wall, container and container subtraction.
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn circular_angled_wall_uses_cut_cylinders() {
        let mut store = SolidStore::new();
        let faces = crate::aperture::FaceNormals::from_angles(0.1, 0.1);
        let ends = Ends::flat(100.0, 1e-6);
        let set = build_circular(
            &mut store,
            "c",
            10.0,
            margins(),
            &ends,
            Some((faces.input, faces.output)),
            true,
        )
        .unwrap();
        assert!(matches!(
            store.solid(set.vacuum).unwrap().shape,
            crate::solid::SolidShape::CutTubs { .. }
        ));
        let pipe = set.pipe.unwrap();
        assert!(store.contains(pipe, &Point3::new(10.5, 0.0, 0.0)).unwrap());
        assert!(!store.contains(pipe, &Point3::new(9.5, 0.0, 0.0)).unwrap());
        assert!(matches!(
            store.solid(set.container_subtraction).unwrap().shape,
            crate::solid::SolidShape::Tubs { .. }
        ));
    }

    #[test]
    fn circular_vacuum_has_no_pipe() {
        let mut store = SolidStore::new();
        let ends = Ends::flat(100.0, 1e-6);
        let set =
            build_circular(&mut store, "cv", 10.0, Margins::new(1e-3, 0.0), &ends, None, false)
                .unwrap();
        assert!(set.pipe.is_none());
    }
}
