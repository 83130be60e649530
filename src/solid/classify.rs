use crate::error::Result;
use crate::math::polygon_2d::contains_point;
use crate::math::{Point2, Point3, Vector3};

use super::{BooleanOp, SolidId, SolidShape, SolidStore};

impl SolidStore {
    /// Whether `point`, given in the solid's own frame, lies inside the
    /// solid. Boundary points may go either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its operands is not in the store.
    pub fn contains(&self, id: SolidId, point: &Point3) -> Result<bool> {
        let inside = match &self.solid(id)?.shape {
            SolidShape::Tubs {
                inner_radius,
                outer_radius,
                half_length,
            } => point.z.abs() <= *half_length && in_annulus(point, *inner_radius, *outer_radius),
            SolidShape::CutTubs {
                inner_radius,
                outer_radius,
                half_length,
                input_normal,
                output_normal,
            } => {
                in_annulus(point, *inner_radius, *outer_radius)
                    && behind_plane(point, -*half_length, input_normal)
                    && behind_plane(point, *half_length, output_normal)
            }
            SolidShape::Box {
                half_x,
                half_y,
                half_z,
            } => point.x.abs() <= *half_x && point.y.abs() <= *half_y && point.z.abs() <= *half_z,
            SolidShape::EllipticalTube {
                semi_x,
                semi_y,
                half_length,
            } => {
                point.z.abs() <= *half_length
                    && *semi_x > 0.0
                    && *semi_y > 0.0
                    && (point.x / semi_x).powi(2) + (point.y / semi_y).powi(2) <= 1.0
            }
            SolidShape::ExtrudedPolygon {
                points,
                half_length,
            } => {
                point.z.abs() <= *half_length
                    && contains_point(points, &Point2::new(point.x, point.y))
            }
            SolidShape::Boolean {
                op,
                first,
                second,
                offset,
            } => {
                let in_first = self.contains(*first, point)?;
                let shifted = point - offset;
                match op {
                    BooleanOp::Union => in_first || self.contains(*second, &shifted)?,
                    BooleanOp::Subtract => in_first && !self.contains(*second, &shifted)?,
                    BooleanOp::Intersect => in_first && self.contains(*second, &shifted)?,
                }
            }
        };
        Ok(inside)
    }
}

fn in_annulus(point: &Point3, inner_radius: f64, outer_radius: f64) -> bool {
    let r = point.x.hypot(point.y);
    r <= outer_radius && (inner_radius <= 0.0 || r >= inner_radius)
}

/// Whether `point` is on the inner side of the plane through `(0, 0, z)`
/// with outward normal `normal`.
fn behind_plane(point: &Point3, z: f64, normal: &Vector3) -> bool {
    (point - Point3::new(0.0, 0.0, z)).dot(normal) <= 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::solid::{
        Intersect, MakeBox, MakeCutTubs, MakeEllipticalTube, MakeExtrudedPolygon, MakeTubs,
        Subtract, Union,
    };

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn tubs_annulus() {
        let mut store = SolidStore::new();
        let t = MakeTubs::new("t", 2.0, 3.0, 5.0).execute(&mut store).unwrap();
        assert!(store.contains(t, &p(2.5, 0.0, 0.0)).unwrap());
        assert!(!store.contains(t, &p(1.0, 0.0, 0.0)).unwrap());
        assert!(!store.contains(t, &p(2.5, 0.0, 6.0)).unwrap());
    }

    #[test]
    fn cut_tubs_tilted_face() {
        let mut store = SolidStore::new();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let c = MakeCutTubs::new(
            "c",
            0.0,
            10.0,
            20.0,
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(s, 0.0, s),
        )
        .execute(&mut store)
        .unwrap();
        // Output face plane: x + z = 20, so at x = 5 it sits at z = 15.
        assert!(store.contains(c, &p(5.0, 0.0, 14.0)).unwrap());
        assert!(!store.contains(c, &p(5.0, 0.0, 16.0)).unwrap());
        assert!(store.contains(c, &p(-5.0, 0.0, 24.0)).unwrap());
    }

    #[test]
    fn ellipse_and_box() {
        let mut store = SolidStore::new();
        let e = MakeEllipticalTube::new("e", 4.0, 2.0, 1.0).execute(&mut store).unwrap();
        let b = MakeBox::new("b", 3.0, 3.0, 1.0).execute(&mut store).unwrap();
        let both = Intersect::new("i", e, b).execute(&mut store).unwrap();
        assert!(store.contains(e, &p(3.9, 0.0, 0.0)).unwrap());
        assert!(!store.contains(both, &p(3.5, 0.0, 0.0)).unwrap());
        assert!(store.contains(both, &p(2.5, 0.5, 0.0)).unwrap());
        assert!(!store.contains(both, &p(0.0, 2.5, 0.0)).unwrap());
    }

    #[test]
    fn extruded_polygon() {
        let mut store = SolidStore::new();
        let tri = vec![Point2::new(0.0, 2.0), Point2::new(2.0, -1.0), Point2::new(-2.0, -1.0)];
        let x = MakeExtrudedPolygon::new("x", tri, 1.0).execute(&mut store).unwrap();
        assert!(store.contains(x, &p(0.0, 0.0, 0.5)).unwrap());
        assert!(!store.contains(x, &p(1.5, 1.5, 0.0)).unwrap());
    }

    #[test]
    fn boolean_offsets_and_ops() {
        let mut store = SolidStore::new();
        let a = MakeBox::new("a", 1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let b = MakeBox::new("b", 1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let u = Union::new("u", a, b)
            .with_offset(Vector3::new(3.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        assert!(store.contains(u, &p(3.5, 0.0, 0.0)).unwrap());
        assert!(!store.contains(u, &p(1.5, 0.0, 0.0)).unwrap());

        let inner = MakeBox::new("inner", 0.5, 0.5, 2.0).execute(&mut store).unwrap();
        let shell = Subtract::new("s", a, inner).execute(&mut store).unwrap();
        assert!(!store.contains(shell, &p(0.0, 0.0, 0.0)).unwrap());
        assert!(store.contains(shell, &p(0.75, 0.0, 0.0)).unwrap());
    }
}
