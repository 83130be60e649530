use super::{Point2, TOLERANCE};

/// Returns the minimum distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len = ab.norm();
    if len < TOLERANCE {
        return (p - a).norm();
    }
    let ap = p - a;
    (ab.x * ap.y - ab.y * ap.x).abs() / len
}

/// Returns the minimum distance from `p` to a closed polygon's boundary.
#[must_use]
pub fn point_to_polygon_dist(p: &Point2, polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| point_to_segment_dist(p, &polygon[i], &polygon[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_dist_perpendicular() {
        let d = point_to_segment_dist(&p(5.0, 3.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert!((d - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_dist_beyond_end() {
        let d = point_to_segment_dist(&p(13.0, 4.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert!((d - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_dist_ignores_segment_ends() {
        let d = point_to_line_dist(&p(20.0, -2.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert!((d - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn polygon_dist_to_square() {
        let square = [p(-1.0, 1.0), p(1.0, 1.0), p(1.0, -1.0), p(-1.0, -1.0)];
        let d = point_to_polygon_dist(&p(0.0, 0.25), &square);
        assert!((d - 0.75).abs() < TOLERANCE);
    }
}
