//! Aperture descriptions and the transverse cross-sections built from them.
//!
//! An [`ApertureSpec`] names one of the fixed [`ApertureType`] families and
//! carries its parameters. [`ApertureShape::resolve`] turns it into either an
//! analytic primitive description or a sampled [`BoundaryCurveSet`].

mod curves;
mod kind;
pub mod points;
pub mod shapes;
mod spec;

pub use curves::{BoundaryCurveSet, Layer, Margins};
pub use kind::{ApertureType, POINTS_FILE_PREFIX};
pub use shapes::ApertureShape;
pub use spec::{ApertureSpec, FaceNormals, PointFileRef};
