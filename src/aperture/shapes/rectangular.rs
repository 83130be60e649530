use crate::aperture::curves::{Layer, Margins};
use crate::math::Point2;

/// Cutter radius: the container-subtraction half-diagonal plus one percent.
#[must_use]
pub fn intersection_radius(half_x: f64, half_y: f64, margins: Margins) -> f64 {
    let o = margins.offset(Layer::ContainerSubtraction);
    (half_x + o).hypot(half_y + o) * 1.01
}

/// Clockwise corners, starting top left.
#[must_use]
pub fn outline(half_x: f64, half_y: f64) -> Vec<Point2> {
    vec![
        Point2::new(-half_x, half_y),
        Point2::new(half_x, half_y),
        Point2::new(half_x, -half_y),
        Point2::new(-half_x, -half_y),
    ]
}
