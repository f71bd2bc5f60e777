use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Corner `(min.x, min.y)`.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        self.min
    }

    /// Corner `(max.x, min.y)`.
    #[must_use]
    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.max.x, self.min.y)
    }

    /// Corner `(max.x, max.y)`.
    #[must_use]
    pub fn top_right(&self) -> Point2 {
        self.max
    }

    /// Corner `(min.x, max.y)`.
    #[must_use]
    pub fn top_left(&self) -> Point2 {
        Point2::new(self.min.x, self.max.y)
    }
}

/// Computes the axis-aligned bounding box of a point set.
#[derive(Debug)]
pub struct BoundingBox2D<'a> {
    points: &'a [Point2],
}

impl<'a> BoundingBox2D<'a> {
    /// Creates a new `BoundingBox2D` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the point set is empty.
    pub fn execute(&self) -> Result<Aabb2> {
        let Some((first, rest)) = self.points.split_first() else {
            return Err(GeometryError::Degenerate(
                "bounding box of an empty point set".to_owned(),
            )
            .into());
        };
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Ok(Aabb2 { min, max })
    }
}
