use crate::math::polygon_2d::contains_point;
use crate::math::{Point2, TOLERANCE};

/// Checks that a closed boundary encloses every point of a set.
///
/// A point counts as enclosed when it lies inside the boundary or within
/// the tolerance of one of its edges.
#[derive(Debug)]
pub struct Encloses<'a> {
    boundary: &'a [Point2],
    points: &'a [Point2],
    tolerance: f64,
}

impl<'a> Encloses<'a> {
    /// Creates a new `Encloses` query with the default tolerance.
    #[must_use]
    pub fn new(boundary: &'a [Point2], points: &'a [Point2]) -> Self {
        Self {
            boundary,
            points,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the distance within which a point on an edge counts as enclosed.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the indices of points that fall outside the boundary.
    #[must_use]
    pub fn outside(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| !contains_point(self.boundary, p, self.tolerance))
            .map(|(i, _)| i)
            .collect()
    }

    /// Executes the query, returning `true` if every point is enclosed.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.points
            .iter()
            .all(|p| contains_point(self.boundary, p, self.tolerance))
    }
}
