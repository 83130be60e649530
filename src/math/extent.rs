use super::Point2;

/// Transverse extent of a cross-section, possibly asymmetric.
///
/// Negative-side members are stored as signed coordinates, so a centred
/// 10 mm half-width box has `x_neg = -10.0` and `x_pos = 10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent2D {
    pub x_neg: f64,
    pub x_pos: f64,
    pub y_neg: f64,
    pub y_pos: f64,
}

impl Extent2D {
    /// Creates an extent from explicit bounds.
    #[must_use]
    pub fn new(x_neg: f64, x_pos: f64, y_neg: f64, y_pos: f64) -> Self {
        Self {
            x_neg,
            x_pos,
            y_neg,
            y_pos,
        }
    }

    /// Creates an extent symmetric about the origin.
    #[must_use]
    pub fn symmetric(half_x: f64, half_y: f64) -> Self {
        Self::new(-half_x, half_x, -half_y, half_y)
    }

    /// Creates the bounding extent of a set of points.
    ///
    /// An empty slice yields the zero extent.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        points.iter().skip(1).fold(
            Self::new(first.x, first.x, first.y, first.y),
            |e, p| {
                Self::new(
                    e.x_neg.min(p.x),
                    e.x_pos.max(p.x),
                    e.y_neg.min(p.y),
                    e.y_pos.max(p.y),
                )
            },
        )
    }

    /// Largest absolute x coordinate.
    #[must_use]
    pub fn max_abs_x(&self) -> f64 {
        self.x_neg.abs().max(self.x_pos.abs())
    }

    /// Largest absolute y coordinate.
    #[must_use]
    pub fn max_abs_y(&self) -> f64 {
        self.y_neg.abs().max(self.y_pos.abs())
    }

    /// Radius of the smallest origin-centred circle enclosing the extent box.
    #[must_use]
    pub fn enclosing_radius(&self) -> f64 {
        self.max_abs_x().hypot(self.max_abs_y())
    }

    /// Whether the extent is symmetric about both axes.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (self.x_neg + self.x_pos).abs() < tolerance && (self.y_neg + self.y_pos).abs() < tolerance
    }

    /// Extends this transverse extent with a longitudinal half-length.
    #[must_use]
    pub fn with_half_length(self, half_length: f64) -> Extent3D {
        Extent3D {
            x_neg: self.x_neg,
            x_pos: self.x_pos,
            y_neg: self.y_neg,
            y_pos: self.y_pos,
            z_neg: -half_length,
            z_pos: half_length,
        }
    }
}

/// Full 3D extent of a beam-pipe segment, used for world sizing and placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent3D {
    pub x_neg: f64,
    pub x_pos: f64,
    pub y_neg: f64,
    pub y_pos: f64,
    pub z_neg: f64,
    pub z_pos: f64,
}

impl Extent3D {
    /// Returns the transverse part of the extent.
    #[must_use]
    pub fn transverse(&self) -> Extent2D {
        Extent2D::new(self.x_neg, self.x_pos, self.y_neg, self.y_pos)
    }

    /// Full longitudinal length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.z_pos - self.z_neg
    }
}
