//! Cross-section generators, one module per aperture family.
//!
//! Primitive families (circle, ellipse, rectangle and their intersections)
//! describe each layer analytically. Point-based families sample a clockwise
//! vacuum outline and grow it to the five [`BoundaryCurveSet`] curves.

pub mod circular;
pub mod clic_pcl;
pub mod elliptical;
pub mod lhc;
pub mod octagonal;
pub mod points_file;
pub mod racetrack;
pub mod rect_ellipse;
pub mod rectangular;
pub mod rhombus;

use crate::error::{ConfigurationError, Result};
use crate::math::polygon_2d::dedup_vertices;
use crate::math::{Extent2D, Point2};
use crate::solid::{MakeBox, MakeExtrudedPolygon, SolidId, SolidStore};

use super::curves::{BoundaryCurveSet, Layer, Margins};
use super::kind::ApertureType;
use super::spec::ApertureSpec;

/// A resolved transverse cross-section.
#[derive(Debug, Clone, PartialEq)]
pub enum ApertureShape {
    Circle {
        radius: f64,
    },
    Ellipse {
        semi_x: f64,
        semi_y: f64,
    },
    Rectangle {
        half_x: f64,
        half_y: f64,
    },
    /// Rectangle intersected with an ellipse.
    RectEllipse {
        half_x: f64,
        half_y: f64,
        semi_x: f64,
        semi_y: f64,
    },
    /// Rectangle intersected with a circle.
    Lhc {
        half_x: f64,
        half_y: f64,
        radius: f64,
    },
    /// Sampled outline with its precomputed cutter radius.
    Polygon {
        curves: BoundaryCurveSet,
        intersection_radius: f64,
    },
}

impl ApertureShape {
    /// Resolves the cross-section for `spec`.
    ///
    /// Shapes with cheaper equivalents are simplified here: a round ellipse
    /// becomes a circle, and a rect-ellipse whose box contains the ellipse
    /// becomes that ellipse. `points` is the loaded outline for
    /// [`ApertureType::PointsFile`] and is ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a points-file shape is given no points.
    pub fn resolve(
        spec: &ApertureSpec,
        margins: Margins,
        points_per_full_turn: usize,
        points: Option<&[Point2]>,
    ) -> std::result::Result<Self, ConfigurationError> {
        let [a1, a2, a3, a4] = spec.parameters();
        let shape = match spec.shape {
            ApertureType::Circular | ApertureType::CircularVacuum => Self::Circle { radius: a1 },
            ApertureType::Elliptical => elliptical::resolve(a1, a2),
            ApertureType::Rectangular => Self::Rectangle { half_x: a1, half_y: a2 },
            ApertureType::RectEllipse => rect_ellipse::resolve(a1, a2, a3, a4),
            ApertureType::Lhc | ApertureType::LhcDetailed => Self::Lhc {
                half_x: a1,
                half_y: a2,
                radius: a3,
            },
            ApertureType::Octagonal => {
                let curves = octagonal::generate_points(a1, a2, a3, a4, margins);
                let intersection_radius = octagonal::intersection_radius(&curves);
                Self::Polygon { curves, intersection_radius }
            }
            ApertureType::Rhombus => {
                let curves = rhombus::generate_points(a1, a2, a3, margins, points_per_full_turn);
                let intersection_radius = rhombus::intersection_radius(&curves);
                Self::Polygon { curves, intersection_radius }
            }
            ApertureType::RaceTrack => Self::Polygon {
                curves: racetrack::generate_points(a1, a2, a3, margins, points_per_full_turn),
                intersection_radius: racetrack::intersection_radius(a1, a2, a3, margins),
            },
            ApertureType::ClicPcl => Self::Polygon {
                curves: clic_pcl::generate_points(a1, a2, a3, a4, margins, points_per_full_turn),
                intersection_radius: clic_pcl::intersection_radius(a1, a2, a3, a4, margins),
            },
            ApertureType::PointsFile => {
                let points = points.ok_or_else(|| ConfigurationError::InvalidAperture {
                    shape: spec.shape.name(),
                    reason: "no outline points loaded".to_owned(),
                })?;
                let curves = points_file::generate_points(points, margins);
                let intersection_radius = points_file::intersection_radius(&curves);
                Self::Polygon { curves, intersection_radius }
            }
        };
        Ok(shape)
    }

    /// Whether the cross-section is a full circle.
    #[must_use]
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::Circle { .. })
    }

    /// Transverse extent of one layer.
    #[must_use]
    pub fn layer_extent(&self, layer: Layer, margins: Margins) -> Extent2D {
        let d = margins.offset(layer);
        match self {
            Self::Circle { radius } => Extent2D::symmetric(radius + d, radius + d),
            Self::Ellipse { semi_x, semi_y } => Extent2D::symmetric(semi_x + d, semi_y + d),
            Self::Rectangle { half_x, half_y } => Extent2D::symmetric(half_x + d, half_y + d),
            Self::RectEllipse {
                half_x,
                half_y,
                semi_x,
                semi_y,
            } => rect_ellipse::extent(*half_x + d, *half_y + d, *semi_x + d, *semi_y + d),
            Self::Lhc { half_x, half_y, radius } => {
                lhc::extent(*half_x + d, *half_y + d, *radius + d)
            }
            Self::Polygon { curves, .. } => Extent2D::from_points(curves.curve(layer)),
        }
    }

    /// Extent of the container-subtraction layer, the outermost boundary.
    #[must_use]
    pub fn extent(&self, margins: Margins) -> Extent2D {
        self.layer_extent(Layer::ContainerSubtraction, margins)
    }

    /// Radius of the cylinder used to cut angled end faces.
    ///
    /// Always larger than the container-subtraction boundary, by a
    /// shape-specific margin.
    #[must_use]
    pub fn intersection_radius(&self, margins: Margins) -> f64 {
        match self {
            Self::Circle { radius } => circular::intersection_radius(*radius, margins),
            Self::Ellipse { semi_x, semi_y } => {
                elliptical::intersection_radius(*semi_x, *semi_y, margins)
            }
            Self::Rectangle { half_x, half_y } => {
                rectangular::intersection_radius(*half_x, *half_y, margins)
            }
            Self::RectEllipse {
                half_x,
                half_y,
                semi_x,
                semi_y,
            } => rect_ellipse::intersection_radius(*half_x, *half_y, *semi_x, *semi_y, margins),
            Self::Lhc { half_x, half_y, radius } => {
                lhc::intersection_radius(*half_x, *half_y, *radius, margins)
            }
            Self::Polygon {
                intersection_radius, ..
            } => *intersection_radius,
        }
    }

    /// Clockwise sampled outline of one layer.
    ///
    /// Curved primitive boundaries are sampled with `points_per_full_turn`
    /// points per turn; point-based shapes return their stored curve.
    #[must_use]
    pub fn outline(
        &self,
        layer: Layer,
        margins: Margins,
        points_per_full_turn: usize,
    ) -> Vec<Point2> {
        let d = margins.offset(layer);
        let n = points_per_full_turn;
        match self {
            Self::Circle { radius } => elliptical::outline(radius + d, radius + d, n),
            Self::Ellipse { semi_x, semi_y } => elliptical::outline(semi_x + d, semi_y + d, n),
            Self::Rectangle { half_x, half_y } => rectangular::outline(half_x + d, half_y + d),
            Self::RectEllipse {
                half_x,
                half_y,
                semi_x,
                semi_y,
            } => clamp_to_box(
                elliptical::outline(semi_x + d, semi_y + d, n),
                half_x + d,
                half_y + d,
            ),
            Self::Lhc { half_x, half_y, radius } => {
                clamp_to_box(elliptical::outline(radius + d, radius + d, n), half_x + d, half_y + d)
            }
            Self::Polygon { curves, .. } => curves.curve(layer).to_vec(),
        }
    }

    /// Builds the solid bounded by one layer, extruded over `half_length`
    /// either side of the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if a primitive rejects its dimensions.
    pub fn make_solid(
        &self,
        store: &mut SolidStore,
        name: &str,
        layer: Layer,
        margins: Margins,
        half_length: f64,
    ) -> Result<SolidId> {
        let d = margins.offset(layer);
        match self {
            Self::Circle { radius } => circular::make_solid(store, name, radius + d, half_length),
            Self::Ellipse { semi_x, semi_y } => {
                elliptical::make_solid(store, name, semi_x + d, semi_y + d, half_length)
            }
            Self::Rectangle { half_x, half_y } => {
                MakeBox::new(name, half_x + d, half_y + d, half_length).execute(store)
            }
            Self::RectEllipse {
                half_x,
                half_y,
                semi_x,
                semi_y,
            } => rect_ellipse::make_solid(
                store,
                name,
                [half_x + d, half_y + d],
                [semi_x + d, semi_y + d],
                half_length,
            ),
            Self::Lhc { half_x, half_y, radius } => {
                lhc::make_solid(store, name, half_x + d, half_y + d, radius + d, half_length)
            }
            Self::Polygon { curves, .. } => {
                MakeExtrudedPolygon::new(name, curves.curve(layer).to_vec(), half_length)
                    .execute(store)
            }
        }
    }
}

/// Clamps a sampled outline into an origin-centred box, giving the outline
/// of the intersection of the original convex shape with the box.
fn clamp_to_box(points: Vec<Point2>, half_x: f64, half_y: f64) -> Vec<Point2> {
    dedup_vertices(
        points
            .into_iter()
            .map(|p| Point2::new(p.x.clamp(-half_x, half_x), p.y.clamp(-half_y, half_y)))
            .collect(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::{is_clockwise, max_radius};
    use crate::math::Point3;

    fn margins() -> Margins {
        Margins::new(1e-3, 1.0)
    }

    fn resolve(spec: &ApertureSpec) -> ApertureShape {
        ApertureShape::resolve(spec, margins(), 40, None).unwrap()
    }

    #[test]
    fn round_ellipse_resolves_to_circle() {
        let spec = ApertureSpec::new(ApertureType::Elliptical, 100.0)
            .with_aperture(10.0, 10.0, 0.0, 0.0);
        assert_eq!(resolve(&spec), ApertureShape::Circle { radius: 10.0 });
    }

    #[test]
    fn points_file_without_points_fails() {
        let spec = ApertureSpec::new(ApertureType::PointsFile, 100.0);
        assert!(ApertureShape::resolve(&spec, margins(), 40, None).is_err());
    }

    #[test]
    fn outlines_are_clockwise() {
        let specs = [
            ApertureSpec::new(ApertureType::Circular, 1.0).with_aperture(5.0, 0.0, 0.0, 0.0),
            ApertureSpec::new(ApertureType::Rectangular, 1.0).with_aperture(5.0, 3.0, 0.0, 0.0),
            ApertureSpec::new(ApertureType::Lhc, 1.0).with_aperture(4.0, 5.0, 4.5, 0.0),
            ApertureSpec::new(ApertureType::Octagonal, 1.0).with_aperture(5.0, 4.0, 3.0, 2.0),
        ];
        for spec in &specs {
            let outline = resolve(spec).outline(Layer::Container, margins(), 40);
            assert!(is_clockwise(&outline), "{}", spec.shape);
        }
    }

    #[test]
    fn lhc_outline_is_clipped_by_box() {
        let spec = ApertureSpec::new(ApertureType::Lhc, 1.0).with_aperture(4.0, 10.0, 5.0, 0.0);
        let shape = resolve(&spec);
        let outline = shape.outline(Layer::Vacuum, margins(), 40);
        assert!(outline.iter().all(|p| p.x.abs() <= 4.0 + 1e-12));
        assert!((max_radius(&outline) - 5.0).abs() < 1e-9);
        let extent = shape.layer_extent(Layer::Vacuum, margins());
        assert!((extent.x_pos - 4.0).abs() < 1e-12);
        assert!((extent.y_pos - 5.0).abs() < 1e-12);
    }

    #[test]
    fn layer_solids_grow_outwards() {
        let spec =
            ApertureSpec::new(ApertureType::RectEllipse, 1.0).with_aperture(4.0, 2.0, 5.0, 3.0);
        let shape = resolve(&spec);
        let mut store = SolidStore::new();
        let vacuum = shape.make_solid(&mut store, "v", Layer::Vacuum, margins(), 1.0).unwrap();
        let outer = shape.make_solid(&mut store, "o", Layer::PipeOuter, margins(), 1.0).unwrap();
        let point = Point3::new(4.5, 0.0, 0.0);
        assert!(!store.contains(vacuum, &point).unwrap());
        assert!(store.contains(outer, &point).unwrap());
    }

    #[test]
    fn intersection_radius_covers_outline() {
        let spec =
            ApertureSpec::new(ApertureType::RectEllipse, 1.0).with_aperture(4.0, 2.0, 5.0, 3.0);
        let shape = resolve(&spec);
        let outline = shape.outline(Layer::ContainerSubtraction, margins(), 40);
        assert!(shape.intersection_radius(margins()) > max_radius(&outline));
    }
}
