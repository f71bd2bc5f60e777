use crate::math::distance_2d::point_distance;
use crate::math::Point2;
use crate::operations::query::Aabb2;

/// Positions of the input points nearest to each bounding-box corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CornerAnchors {
    pub bottom_left: usize,
    pub bottom_right: usize,
    pub top_right: usize,
    pub top_left: usize,
}

impl CornerAnchors {
    /// Finds the nearest point to every corner of `bbox` in a single pass.
    ///
    /// Distances are compared with strict less-than, so the first point
    /// reaching the minimum wins. `points` must be non-empty and finite.
    pub(crate) fn locate(points: &[Point2], bbox: &Aabb2) -> Self {
        let corners = [
            bbox.bottom_right(),
            bbox.top_right(),
            bbox.bottom_left(),
            bbox.top_left(),
        ];
        let mut nearest = [(0_usize, f64::INFINITY); 4];

        for (i, p) in points.iter().enumerate() {
            for (slot, corner) in nearest.iter_mut().zip(&corners) {
                let d = point_distance(p, corner);
                if d < slot.1 {
                    *slot = (i, d);
                }
            }
        }

        Self {
            bottom_right: nearest[0].0,
            top_right: nearest[1].0,
            bottom_left: nearest[2].0,
            top_left: nearest[3].0,
        }
    }
}
