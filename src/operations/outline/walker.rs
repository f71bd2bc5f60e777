use tracing::trace;

use crate::math::{points_equal, Point2};

/// Edge of the bounding box traced by one staircase walk.
///
/// Each variant fixes the direction of travel and the rules that pick the
/// next boundary vertex:
///
/// | Edge   | Travel        | Candidate `q` of anchor `p` | Extremal, then tie-break | Corner          |
/// |--------|---------------|-----------------------------|--------------------------|-----------------|
/// | Bottom | left → right  | `q.y <= p.y`, `q.x > p.x`   | min y, max x             | `(p.x, c.y)`    |
/// | Right  | bottom → top  | `q.x >= p.x`, `q.y > p.y`   | max x, max y             | `(c.x, p.y)`    |
/// | Top    | right → left  | `q.y > p.y`, `q.x <= p.x`   | max y, min x             | `(p.x, c.y)`    |
/// | Left   | top → bottom  | `q.x <= p.x`, `q.y < p.y`   | min x, min y             | `(p.x, c.y)`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Bottom,
    Right,
    Top,
    Left,
}

impl Edge {
    /// Returns `true` if `q` lies ahead of `anchor` in this edge's direction.
    fn advances(self, anchor: &Point2, q: &Point2) -> bool {
        match self {
            Edge::Bottom => q.y <= anchor.y && q.x > anchor.x,
            Edge::Right => q.x >= anchor.x && q.y > anchor.y,
            Edge::Top => q.y > anchor.y && q.x <= anchor.x,
            Edge::Left => q.x <= anchor.x && q.y < anchor.y,
        }
    }

    /// Returns `true` if candidate `q` strictly beats the current `best`.
    ///
    /// Strictness keeps the earliest candidate on a full tie.
    #[allow(clippy::float_cmp)]
    fn outranks(self, q: &Point2, best: &Point2) -> bool {
        match self {
            Edge::Bottom => q.y < best.y || (q.y == best.y && q.x > best.x),
            Edge::Right => q.x > best.x || (q.x == best.x && q.y > best.y),
            Edge::Top => q.y > best.y || (q.y == best.y && q.x < best.x),
            Edge::Left => q.x < best.x || (q.x == best.x && q.y < best.y),
        }
    }

    /// Returns `true` if the corner towards `chosen` makes `anchor` redundant.
    ///
    /// The left edge always keeps its anchor.
    fn supersedes(self, anchor: &Point2, chosen: &Point2) -> bool {
        match self {
            Edge::Bottom => chosen.y < anchor.y,
            Edge::Right => chosen.x > anchor.x,
            Edge::Top => chosen.y > anchor.y,
            Edge::Left => false,
        }
    }

    /// The orthogonal corner between `anchor` and `chosen`.
    fn corner(self, anchor: &Point2, chosen: &Point2) -> Point2 {
        match self {
            Edge::Right => Point2::new(chosen.x, anchor.y),
            Edge::Bottom | Edge::Top | Edge::Left => Point2::new(anchor.x, chosen.y),
        }
    }
}

/// Ordered boundary vertices accumulated across all walks.
///
/// Consecutive equal vertices are collapsed on insertion.
#[derive(Debug)]
pub(crate) struct Boundary {
    vertices: Vec<Point2>,
    tolerance: f64,
}

impl Boundary {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            vertices: Vec::new(),
            tolerance,
        }
    }

    pub(crate) fn push(&mut self, p: Point2) {
        if let Some(last) = self.vertices.last() {
            if points_equal(last, &p, self.tolerance) {
                return;
            }
        }
        self.vertices.push(p);
    }

    pub(crate) fn last(&self) -> Option<Point2> {
        self.vertices.last().copied()
    }

    /// Finishes the boundary. Trailing vertices equal to the first are
    /// dropped; the closing edge is implicit.
    pub(crate) fn into_vertices(mut self) -> Vec<Point2> {
        while self.vertices.len() > 1
            && points_equal(
                &self.vertices[0],
                &self.vertices[self.vertices.len() - 1],
                self.tolerance,
            )
        {
            self.vertices.pop();
        }
        self.vertices
    }
}

/// Returns the offset within `rest` of the extremal candidate ahead of `anchor`.
fn select(edge: Edge, anchor: &Point2, rest: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, q) in rest.iter().enumerate() {
        if !edge.advances(anchor, q) {
            continue;
        }
        match best {
            Some(b) if !edge.outranks(q, &rest[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Lifts points dominated by `anchor` (left of and below it) onto its
/// horizontal line.
fn lift_dominated(rest: &mut [Point2], anchor: &Point2) {
    for q in rest.iter_mut().filter(|q| q.x < anchor.x && q.y < anchor.y) {
        q.y = anchor.y;
    }
}

/// Walks one arc along `edge`, appending staircase vertices to `boundary`.
///
/// From the current anchor, the extremal candidate ahead becomes the next
/// anchor and an orthogonal corner is emitted between the two. Without a
/// candidate the anchor is kept and the walk moves to the next point. The
/// arc's last point is never emitted; the following arc starts from it.
pub(crate) fn walk(edge: Edge, arc: &[Point2], boundary: &mut Boundary) {
    if arc.len() < 2 {
        return;
    }

    let mut arc = arc.to_vec();
    let last = arc.len() - 1;
    let mut pos = 0;

    while pos < last {
        let anchor = arc[pos];
        if let Some(offset) = select(edge, &anchor, &arc[pos..]) {
            let next = pos + offset;
            let chosen = arc[next];
            let retained = !edge.supersedes(&anchor, &chosen);
            trace!(?edge, pos, next, retained, "staircase corner");
            if retained {
                boundary.push(anchor);
            }
            boundary.push(edge.corner(&anchor, &chosen));
            pos = next;
        } else {
            trace!(?edge, pos, "no candidate ahead");
            boundary.push(anchor);
            if edge == Edge::Right {
                lift_dominated(&mut arc[pos + 1..], &anchor);
            }
            pos += 1;
        }
    }
}
