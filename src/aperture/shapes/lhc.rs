//! The LHC "squared circle": a circle clipped by a rectangle.

use crate::aperture::curves::{Layer, Margins};
use crate::error::Result;
use crate::math::Extent2D;
use crate::solid::{Intersect, MakeBox, MakeTubs, SolidId, SolidStore};

/// Transverse extent of the clipped circle.
#[must_use]
pub fn extent(half_x: f64, half_y: f64, radius: f64) -> Extent2D {
    Extent2D::symmetric(half_x.min(radius), half_y.min(radius))
}

/// Cylinder intersected with a box twice as long.
///
/// # Errors
///
/// Returns an error if a dimension is invalid.
pub fn make_solid(
    store: &mut SolidStore,
    name: &str,
    half_x: f64,
    half_y: f64,
    radius: f64,
    half_length: f64,
) -> Result<SolidId> {
    let tube = MakeTubs::new(format!("{name}_tube"), 0.0, radius, half_length).execute(store)?;
    let rect =
        MakeBox::new(format!("{name}_box"), half_x, half_y, 2.0 * half_length).execute(store)?;
    Intersect::new(name, tube, rect).execute(store)
}

/// Cutter radius: the smaller of the box half-diagonal and the circle
/// radius, plus one percent.
#[must_use]
pub fn intersection_radius(half_x: f64, half_y: f64, radius: f64, margins: Margins) -> f64 {
    let o = margins.offset(Layer::ContainerSubtraction);
    (half_x + o).hypot(half_y + o).min(radius + o) * 1.01
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn flats_clip_the_circle() {
        let mut store = SolidStore::new();
        let id = make_solid(&mut store, "lhc", 22.0, 17.0, 22.0, 10.0).unwrap();
        assert!(store.contains(id, &Point3::new(21.0, 0.0, 0.0)).unwrap());
        assert!(!store.contains(id, &Point3::new(0.0, 18.0, 0.0)).unwrap());
        assert!(!store.contains(id, &Point3::new(16.0, 16.0, 0.0)).unwrap());
    }

    #[test]
    fn radius_uses_circle_when_smaller() {
        let m = Margins::new(0.0, 0.0);
        assert!((intersection_radius(30.0, 30.0, 10.0, m) - 10.1).abs() < 1e-12);
        let e = extent(8.0, 30.0, 10.0);
        assert!((e.x_pos - 8.0).abs() < f64::EPSILON);
        assert!((e.y_pos - 10.0).abs() < f64::EPSILON);
    }
}
