use crate::math::{Point2, Vector2};

/// Translates a point set by a displacement vector.
#[derive(Debug)]
pub struct Translate2D<'a> {
    points: &'a [Point2],
    displacement: Vector2,
}

impl<'a> Translate2D<'a> {
    /// Creates a new `Translate2D` operation.
    #[must_use]
    pub fn new(points: &'a [Point2], displacement: Vector2) -> Self {
        Self {
            points,
            displacement,
        }
    }

    /// Executes the translation, returning the displaced points in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p + self.displacement).collect()
    }
}
