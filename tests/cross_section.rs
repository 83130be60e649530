use approx::assert_relative_eq;
use beampipe::aperture::shapes::{octagonal, rhombus};
use beampipe::aperture::{
    ApertureShape, ApertureSpec, ApertureType, BoundaryCurveSet, Layer, Margins,
};
use beampipe::math::distance_2d::{point_to_line_dist, point_to_polygon_dist};
use beampipe::math::polygon_2d::{contains_point, max_radius};
use beampipe::math::{Extent2D, Point2};

const PPT: usize = 40;

fn margins() -> Margins {
    Margins::new(1e-3, 1.0)
}

fn square() -> Vec<Point2> {
    vec![
        Point2::new(-12.0, 8.0),
        Point2::new(12.0, 8.0),
        Point2::new(12.0, -8.0),
        Point2::new(-12.0, -8.0),
    ]
}

fn resolve(shape: ApertureType, aper: [f64; 4]) -> ApertureShape {
    let spec = ApertureSpec::new(shape, 1000.0).with_aperture(aper[0], aper[1], aper[2], aper[3]);
    let points = square();
    ApertureShape::resolve(&spec, margins(), PPT, Some(&points)).unwrap()
}

fn all_shapes() -> Vec<(ApertureType, ApertureShape)> {
    [
        (ApertureType::Circular, [30.0, 0.0, 0.0, 0.0]),
        (ApertureType::Elliptical, [30.0, 20.0, 0.0, 0.0]),
        (ApertureType::Rectangular, [30.0, 20.0, 0.0, 0.0]),
        (ApertureType::Lhc, [22.0, 17.0, 22.0, 0.0]),
        (ApertureType::RectEllipse, [25.0, 20.0, 30.0, 25.0]),
        (ApertureType::RaceTrack, [20.0, 10.0, 5.0, 0.0]),
        (ApertureType::Octagonal, [30.0, 20.0, 25.0, 15.0]),
        (ApertureType::ClicPcl, [40.0, 15.0, 10.0, 8.0]),
        (ApertureType::Rhombus, [30.0, 20.0, 0.0, 0.0]),
        (ApertureType::Rhombus, [30.0, 20.0, 3.0, 0.0]),
        (ApertureType::PointsFile, [0.0; 4]),
    ]
    .into_iter()
    .map(|(shape, aper)| (shape, resolve(shape, aper)))
    .collect()
}

fn curves(shape: &ApertureShape) -> Option<&BoundaryCurveSet> {
    match shape {
        ApertureShape::Polygon { curves, .. } => Some(curves),
        _ => None,
    }
}

#[test]
fn layers_nest_strictly() {
    for (kind, shape) in all_shapes() {
        assert_eq!(curves(&shape).is_some(), kind.is_point_based(), "{kind}");
        let Some(curves) = curves(&shape) else { continue };
        assert!(curves.is_clockwise(), "{kind}");
        for pair in Layer::ALL.windows(2) {
            let (inner, outer) = (curves.curve(pair[0]), curves.curve(pair[1]));
            for p in inner {
                assert!(
                    contains_point(outer, p),
                    "{kind}: {:?} point {p} outside {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn extent_matches_container_subtraction_outline() {
    for (kind, shape) in all_shapes() {
        let outline = shape.outline(Layer::ContainerSubtraction, margins(), PPT);
        let expected = Extent2D::from_points(&outline);
        let extent = shape.extent(margins());
        assert_relative_eq!(extent.x_neg, expected.x_neg, epsilon = 1e-9);
        assert_relative_eq!(extent.x_pos, expected.x_pos, epsilon = 1e-9);
        assert_relative_eq!(extent.y_neg, expected.y_neg, epsilon = 1e-9);
        assert_relative_eq!(extent.y_pos, expected.y_pos, epsilon = 1e-9);
        assert!(extent.x_pos > 0.0 && extent.y_neg < 0.0, "{kind}");
    }
}

#[test]
fn intersection_radius_clears_every_layer() {
    for (kind, shape) in all_shapes() {
        let radius = shape.intersection_radius(margins());
        let outline = shape.outline(Layer::ContainerSubtraction, margins(), PPT);
        assert!(radius > max_radius(&outline), "{kind}: {radius}");
    }
}

#[test]
fn round_ellipse_is_a_circle() {
    assert_eq!(
        resolve(ApertureType::Elliptical, [10.0, 10.0, 0.0, 0.0]),
        ApertureShape::Circle { radius: 10.0 }
    );
}

#[test]
fn rect_ellipse_inside_box_is_an_ellipse() {
    assert_eq!(
        resolve(ApertureType::RectEllipse, [40.0, 40.0, 30.0, 25.0]),
        ApertureShape::Ellipse {
            semi_x: 30.0,
            semi_y: 25.0
        }
    );
}

#[test]
fn octagon_edges_move_by_exact_offset() {
    let base = octagonal::base_points(30.0, 20.0, 25.0, 15.0);
    for d in [0.01, 1.0, 10.0] {
        let curves = octagonal::generate_points(30.0, 20.0, 25.0, 15.0, Margins::new(d, 0.0));
        let grown = &curves.pipe_inner;
        assert_eq!(grown.len(), base.len());
        let n = base.len();
        for i in 0..n {
            let (a, b) = (&base[i], &base[(i + 1) % n]);
            assert_relative_eq!(point_to_line_dist(&grown[i], a, b), d, epsilon = 1e-9);
            assert_relative_eq!(point_to_line_dist(&grown[(i + 1) % n], a, b), d, epsilon = 1e-9);
        }
    }
}

#[test]
fn sharp_rhombus_edges_move_by_exact_offset() {
    let base = rhombus::base_points(30.0, 20.0);
    for d in [0.01, 1.0, 10.0] {
        let curves = rhombus::generate_points(30.0, 20.0, 0.0, Margins::new(d, 0.0), PPT);
        let grown = &curves.pipe_inner;
        assert_eq!(grown.len(), 4);
        for i in 0..4 {
            let (a, b) = (&base[i], &base[(i + 1) % 4]);
            assert_relative_eq!(point_to_line_dist(&grown[i], a, b), d, epsilon = 1e-9);
        }
    }
}

#[test]
fn rounded_rhombus_edges_move_by_exact_offset() {
    let (a1, a2, r) = (30.0_f64, 20.0_f64, 3.0);
    // The rounded diamond is the diamond through its arc centres grown by r.
    let alpha = a1.atan2(a2);
    let centres = rhombus::base_points(a1 - r / alpha.cos(), a2 - r / alpha.sin());
    for d in [0.01, 1.0, 10.0] {
        let curves = rhombus::generate_points(a1, a2, r, Margins::new(d, 0.0), PPT);
        for p in &curves.vacuum {
            assert_relative_eq!(point_to_polygon_dist(p, &centres), r, epsilon = 1e-9);
        }
        for p in &curves.pipe_inner {
            assert_relative_eq!(point_to_polygon_dist(p, &centres), r + d, epsilon = 1e-9);
        }
    }
}

#[test]
fn clic_pcl_is_vertically_asymmetric() {
    let shape = resolve(ApertureType::ClicPcl, [40.0, 15.0, 10.0, 8.0]);
    let extent = shape.extent(margins());
    assert!(!extent.is_symmetric(1e-6));
    assert!(extent.y_pos > -extent.y_neg);
}
