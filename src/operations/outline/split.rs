use tracing::debug;

use crate::math::Point2;
use crate::operations::query::Aabb2;

use super::walker::{walk, Boundary, Edge};

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, p: &Point2) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Finds where a top or left arc first reaches its box extreme when it does
/// not start there.
///
/// Returns the split position and the edge whose walker handles the leg
/// before it: the top arc still rises (right walker) until it reaches
/// `max.y`, the left arc still runs left (top walker) until it reaches
/// `min.x`. Bottom and right arcs never split.
#[allow(clippy::float_cmp)]
pub(crate) fn convexity_split(edge: Edge, arc: &[Point2], bbox: &Aabb2) -> Option<(usize, Edge)> {
    let (axis, extreme, leading) = match edge {
        Edge::Top => (Axis::Y, bbox.max.y, Edge::Right),
        Edge::Left => (Axis::X, bbox.min.x, Edge::Top),
        Edge::Bottom | Edge::Right => return None,
    };
    let first = arc.first()?;
    if axis.of(first) == extreme {
        return None;
    }
    arc.iter()
        .skip(1)
        .position(|p| axis.of(p) == extreme)
        .map(|i| (i + 1, leading))
}

/// Walks `arc` along `edge`, handing the leading leg to another walker when
/// the arc splits.
pub(crate) fn walk_arc(edge: Edge, arc: &[Point2], bbox: &Aabb2, boundary: &mut Boundary) {
    match convexity_split(edge, arc, bbox) {
        Some((at, leading)) => {
            debug!(?edge, ?leading, split = at, len = arc.len(), "convexity split");
            walk(leading, &arc[..=at], boundary);
            walk(edge, &arc[at..], boundary);
        }
        None => walk(edge, arc, boundary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn bbox(min: (f64, f64), max: (f64, f64)) -> Aabb2 {
        Aabb2 {
            min: Point2::new(min.0, min.1),
            max: Point2::new(max.0, max.1),
        }
    }

    #[test]
    fn top_arc_below_max_splits_at_first_peak() {
        let arc = pts(&[(6.0, 4.0), (1.0, 4.0), (1.0, 6.0), (0.0, 6.0)]);
        let split = convexity_split(Edge::Top, &arc, &bbox((0.0, 0.0), (6.0, 6.0)));
        assert_eq!(split, Some((2, Edge::Right)));
    }

    #[test]
    fn top_arc_starting_at_max_does_not_split() {
        let arc = pts(&[(6.0, 6.0), (3.0, 4.0), (0.0, 6.0)]);
        assert_eq!(
            convexity_split(Edge::Top, &arc, &bbox((0.0, 0.0), (6.0, 6.0))),
            None
        );
    }

    #[test]
    fn left_arc_right_of_min_splits_at_first_leftmost() {
        let arc = pts(&[(2.0, 6.0), (1.0, 4.0), (0.0, 3.0), (0.0, 0.0)]);
        let split = convexity_split(Edge::Left, &arc, &bbox((0.0, 0.0), (6.0, 6.0)));
        assert_eq!(split, Some((2, Edge::Top)));
    }

    #[test]
    fn bottom_and_right_never_split() {
        let arc = pts(&[(1.0, 1.0), (2.0, 0.0)]);
        let b = bbox((0.0, 0.0), (2.0, 2.0));
        assert_eq!(convexity_split(Edge::Bottom, &arc, &b), None);
        assert_eq!(convexity_split(Edge::Right, &arc, &b), None);
    }

    #[test]
    fn unreached_extreme_or_empty_arc_does_not_split() {
        let b = bbox((0.0, 0.0), (6.0, 6.0));
        assert_eq!(convexity_split(Edge::Top, &pts(&[(6.0, 4.0)]), &b), None);
        assert_eq!(convexity_split(Edge::Top, &[], &b), None);
    }

    #[test]
    fn split_arc_walks_both_legs() {
        let arc = pts(&[(6.0, 4.0), (1.0, 4.0), (1.0, 6.0), (0.0, 6.0)]);
        let mut boundary = Boundary::new(TOLERANCE);
        walk_arc(Edge::Top, &arc, &bbox((0.0, 0.0), (6.0, 6.0)), &mut boundary);
        assert_eq!(
            boundary.into_vertices(),
            pts(&[(6.0, 4.0), (1.0, 4.0), (1.0, 6.0)])
        );
    }
}
