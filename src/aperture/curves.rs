use crate::math::polygon_2d::{dedup_vertices, is_clockwise};
use crate::math::{Extent2D, Point2};

/// The five nested transverse boundaries of a beam-pipe segment, innermost
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Vacuum,
    PipeInner,
    PipeOuter,
    Container,
    ContainerSubtraction,
}

impl Layer {
    /// All layers from the vacuum outwards.
    pub const ALL: [Layer; 5] = [
        Self::Vacuum,
        Self::PipeInner,
        Self::PipeOuter,
        Self::Container,
        Self::ContainerSubtraction,
    ];

    /// Suffix used in solid and volume names.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Vacuum => "vacuum",
            Self::PipeInner => "pipe_inner",
            Self::PipeOuter => "pipe_outer",
            Self::Container => "container",
            Self::ContainerSubtraction => "container_subtraction",
        }
    }
}

/// Outward offsets of each layer from the vacuum edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Transverse clearance between neighbouring surfaces.
    pub safety: f64,
    /// Beam-pipe wall thickness.
    pub thickness: f64,
}

impl Margins {
    /// Creates a new set of margins.
    #[must_use]
    pub fn new(safety: f64, thickness: f64) -> Self {
        Self { safety, thickness }
    }

    /// Distance of `layer` outside the vacuum edge.
    #[must_use]
    pub fn offset(&self, layer: Layer) -> f64 {
        let (s, t) = (self.safety, self.thickness);
        match layer {
            Layer::Vacuum => 0.0,
            Layer::PipeInner => s,
            Layer::PipeOuter => s + t,
            Layer::Container => 2.0 * s + t,
            Layer::ContainerSubtraction => 3.0 * s + t,
        }
    }
}

/// Five closed, clockwise point sequences describing one cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurveSet {
    pub vacuum: Vec<Point2>,
    pub pipe_inner: Vec<Point2>,
    pub pipe_outer: Vec<Point2>,
    pub container: Vec<Point2>,
    pub container_subtraction: Vec<Point2>,
    /// Extent of the container-subtraction curve.
    pub extent: Extent2D,
}

impl BoundaryCurveSet {
    /// Builds every curve by evaluating `outline` at each layer's offset.
    ///
    /// `outline(d)` must return the clockwise vacuum outline grown outwards
    /// by `d`.
    pub fn from_outline(margins: Margins, mut outline: impl FnMut(f64) -> Vec<Point2>) -> Self {
        let mut curve = |layer| dedup_vertices(outline(margins.offset(layer)));
        let vacuum = curve(Layer::Vacuum);
        let pipe_inner = curve(Layer::PipeInner);
        let pipe_outer = curve(Layer::PipeOuter);
        let container = curve(Layer::Container);
        let container_subtraction = curve(Layer::ContainerSubtraction);
        let extent = Extent2D::from_points(&container_subtraction);
        Self {
            vacuum,
            pipe_inner,
            pipe_outer,
            container,
            container_subtraction,
            extent,
        }
    }

    /// The curve for one layer.
    #[must_use]
    pub fn curve(&self, layer: Layer) -> &[Point2] {
        match layer {
            Layer::Vacuum => &self.vacuum,
            Layer::PipeInner => &self.pipe_inner,
            Layer::PipeOuter => &self.pipe_outer,
            Layer::Container => &self.container,
            Layer::ContainerSubtraction => &self.container_subtraction,
        }
    }

    /// Whether every curve winds clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        Layer::ALL.iter().all(|&l| is_clockwise(self.curve(l)))
    }
}
