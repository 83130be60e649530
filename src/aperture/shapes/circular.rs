use crate::aperture::curves::{Layer, Margins};
use crate::error::Result;
use crate::solid::{MakeTubs, SolidId, SolidStore};

/// Solid cylinder of `radius`.
///
/// # Errors
///
/// Returns an error if the radius or length is invalid.
pub fn make_solid(
    store: &mut SolidStore,
    name: &str,
    radius: f64,
    half_length: f64,
) -> Result<SolidId> {
    MakeTubs::new(name, 0.0, radius, half_length).execute(store)
}

/// Cutter radius for a circular aperture: the container-subtraction radius
/// plus one percent.
#[must_use]
pub fn intersection_radius(radius: f64, margins: Margins) -> f64 {
    (radius + margins.offset(Layer::ContainerSubtraction)) * 1.01
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_exceeds_container_subtraction() {
        let m = Margins::new(1e-3, 2.0);
        let r = intersection_radius(10.0, m);
        assert!(r > 10.0 + m.offset(Layer::ContainerSubtraction));
        assert!(r < 13.0);
    }
}
