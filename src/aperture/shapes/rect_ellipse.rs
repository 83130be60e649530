//! Rectangle intersected with an ellipse.

use crate::aperture::curves::{Layer, Margins};
use crate::error::Result;
use crate::math::Extent2D;
use crate::solid::{Intersect, MakeBox, MakeEllipticalTube, SolidId, SolidStore};

use super::{elliptical, ApertureShape};

/// Drops the box when it contains the whole ellipse.
#[must_use]
pub fn resolve(half_x: f64, half_y: f64, semi_x: f64, semi_y: f64) -> ApertureShape {
    if half_x >= semi_x && half_y >= semi_y {
        elliptical::resolve(semi_x, semi_y)
    } else {
        ApertureShape::RectEllipse {
            half_x,
            half_y,
            semi_x,
            semi_y,
        }
    }
}

/// Transverse extent of the intersection.
#[must_use]
pub fn extent(half_x: f64, half_y: f64, semi_x: f64, semi_y: f64) -> Extent2D {
    Extent2D::symmetric(half_x.min(semi_x), half_y.min(semi_y))
}

/// Elliptical tube intersected with a box twice as long, so no end faces
/// coincide.
///
/// # Errors
///
/// Returns an error if a dimension is invalid.
pub fn make_solid(
    store: &mut SolidStore,
    name: &str,
    [half_x, half_y]: [f64; 2],
    [semi_x, semi_y]: [f64; 2],
    half_length: f64,
) -> Result<SolidId> {
    let ellipse =
        MakeEllipticalTube::new(format!("{name}_ellipse"), semi_x, semi_y, half_length)
            .execute(store)?;
    let rect =
        MakeBox::new(format!("{name}_box"), half_x, half_y, 2.0 * half_length).execute(store)?;
    Intersect::new(name, ellipse, rect).execute(store)
}

/// Cutter radius: the smaller of the box half-diagonal and the larger
/// ellipse semi-axis, plus one percent.
#[must_use]
pub fn intersection_radius(
    half_x: f64,
    half_y: f64,
    semi_x: f64,
    semi_y: f64,
    margins: Margins,
) -> f64 {
    let o = margins.offset(Layer::ContainerSubtraction);
    let rect = (half_x + o).hypot(half_y + o);
    let ellipse = (semi_x + o).max(semi_y + o);
    rect.min(ellipse) * 1.01
}
