use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Whether the polygon winds clockwise.
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area(points) < 0.0
}

/// Returns the polygon in clockwise order, reversing it if necessary.
#[must_use]
pub fn to_clockwise(mut points: Vec<Point2>) -> Vec<Point2> {
    if signed_area(&points) > 0.0 {
        points.reverse();
    }
    points
}

/// Drops consecutive duplicate vertices, including a closing duplicate of
/// the first vertex.
#[must_use]
pub fn dedup_vertices(points: Vec<Point2>) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_some_and(|last| (p - last).norm() < TOLERANCE) {
            continue;
        }
        out.push(p);
    }
    while out.len() > 1
        && out
            .first()
            .zip(out.last())
            .is_some_and(|(a, b)| (a - b).norm() < TOLERANCE)
    {
        out.pop();
    }
    out
}

/// Largest distance of any vertex from the origin.
#[must_use]
pub fn max_radius(points: &[Point2]) -> f64 {
    points.iter().map(|p| p.coords.norm()).fold(0.0, f64::max)
}

/// Even-odd point-in-polygon test. Points on the boundary may go either way.
#[must_use]
pub fn contains_point(points: &[Point2], p: &Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (&points[i], &points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Outward normal of a directed edge of a clockwise polygon.
///
/// For clockwise winding the interior lies to the right of each edge, so the
/// outward side is the left-hand normal.
#[must_use]
pub fn outward_normal(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(Vector2::new(-d.y / len, d.x / len))
}

/// Offsets a clockwise polygon outwards so that every edge moves by exactly
/// `distance` along its normal, keeping all edge directions.
///
/// Each vertex moves to the intersection of its two displaced neighbouring
/// edges.
#[must_use]
pub fn offset_mitred(points: &[Point2], distance: f64) -> Vec<Point2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = &points[(i + n - 1) % n];
            let curr = &points[i];
            let next = &points[(i + 1) % n];
            match (outward_normal(prev, curr), outward_normal(curr, next)) {
                (Some(n1), Some(n2)) => {
                    let denom = 1.0 + n1.dot(&n2);
                    if denom < TOLERANCE {
                        // Edge folds back on itself; fall back to the first normal.
                        curr + n1 * distance
                    } else {
                        curr + (n1 + n2) * (distance / denom)
                    }
                }
                (Some(n), None) | (None, Some(n)) => curr + n * distance,
                (None, None) => *curr,
            }
        })
        .collect()
}

/// Per-vertex outward normals of a clockwise polygon: the normalized sum of
/// the normals of the two adjacent edges.
#[must_use]
pub fn vertex_normals(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = &points[(i + n - 1) % n];
            let curr = &points[i];
            let next = &points[(i + 1) % n];
            let sum = outward_normal(prev, curr).unwrap_or_else(Vector2::zeros)
                + outward_normal(curr, next).unwrap_or_else(Vector2::zeros);
            let len = sum.norm();
            if len < TOLERANCE {
                Vector2::zeros()
            } else {
                sum / len
            }
        })
        .collect()
}

/// Moves every vertex of a clockwise polygon by `distance` along its
/// vertex normal.
#[must_use]
pub fn offset_along_vertex_normals(points: &[Point2], distance: f64) -> Vec<Point2> {
    points
        .iter()
        .zip(vertex_normals(points))
        .map(|(p, n)| p + n * distance)
        .collect()
}
