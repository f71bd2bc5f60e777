use super::distance_2d::point_to_segment_dist;
use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
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

/// Returns `true` if `p` lies inside the closed polygon or within `tolerance`
/// of one of its edges.
///
/// The last vertex connects back to the first. Interior points are classified
/// with the even-odd crossing rule.
#[must_use]
pub fn contains_point(polygon: &[Point2], p: &Point2, tolerance: f64) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let on_edge =
        (0..n).any(|i| point_to_segment_dist(p, &polygon[i], &polygon[(i + 1) % n]) <= tolerance);
    if on_edge {
        return true;
    }

    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Returns `true` if every edge of the closed polygon is horizontal or
/// vertical within `tolerance`.
#[must_use]
pub fn is_axis_aligned(polygon: &[Point2], tolerance: f64) -> bool {
    let n = polygon.len();
    (0..n).all(|i| {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        (a.x - b.x).abs() <= tolerance || (a.y - b.y).abs() <= tolerance
    })
}

/// Returns `true` if the closed polygon has no self-intersections.
///
/// Non-adjacent edges may not cross or touch, and adjacent edges may not
/// fold back onto each other. Polygons with fewer than 3 vertices are not
/// simple.
#[must_use]
pub fn is_simple(polygon: &[Point2], tolerance: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let edge = |i: usize| (&polygon[i], &polygon[(i + 1) % n]);

    for i in 0..n {
        let (a0, a1) = edge(i);
        let (_, b1) = edge((i + 1) % n);
        // Spike: the neighbour runs back over this edge.
        if point_to_segment_dist(b1, a0, a1) <= tolerance
            || point_to_segment_dist(a0, a1, b1) <= tolerance
        {
            return false;
        }
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c0, c1) = edge(j);
            if segments_touch(a0, a1, c0, c1, tolerance) {
                return false;
            }
        }
    }
    true
}

/// Twice the signed area of triangle `abc`.
fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if segments `a` and `b` cross or share a point within `tolerance`.
fn segments_touch(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, tolerance: f64) -> bool {
    let crosses = orient(a0, a1, b0) * orient(a0, a1, b1) < 0.0
        && orient(b0, b1, a0) * orient(b0, b1, a1) < 0.0;
    crosses
        || point_to_segment_dist(b0, a0, a1) <= tolerance
        || point_to_segment_dist(b1, a0, a1) <= tolerance
        || point_to_segment_dist(a0, b0, b1) <= tolerance
        || point_to_segment_dist(a1, b0, b1) <= tolerance
}
