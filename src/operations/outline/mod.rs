mod anchors;
mod arcs;
mod split;
mod walker;

#[cfg(test)]
mod properties;

use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{points_equal, Point2, TOLERANCE};
use crate::operations::query::BoundingBox2D;

use anchors::CornerAnchors;
use arcs::{ground_bottom_arc, RotatedLoop};
use split::walk_arc;
use walker::{Boundary, Edge};

/// Parameters controlling outline construction.
#[derive(Debug, Clone, Copy)]
pub struct OutlineParams {
    /// Relative and absolute tolerance for point equality.
    pub tolerance: f64,
    /// Minimum number of loop points, after removing an explicit closing point.
    pub min_points: usize,
    /// Reverse clockwise loops before tracing.
    pub normalize_winding: bool,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            min_points: 4,
            normalize_winding: true,
        }
    }
}

/// Computes the orthogonal staircase outline of a stepped point loop.
///
/// The loop is split at the points nearest to the four bounding-box corners
/// into bottom, right, top and left arcs. Each arc is walked with a monotone
/// staircase rule that replaces notches and diagonal runs with axis-aligned
/// corners, so the result encloses every input point.
///
/// # Algorithm
///
/// 1. Locate the corner anchors (nearest point per box corner).
/// 2. Rotate the loop to start at the bottom-left anchor and snap the
///    top-left anchor onto the box corner.
/// 3. Walk the four arcs in order; the top and left arcs first walk a
///    rising leg when they only reach the box extreme partway through.
///
/// The output is counter-clockwise, starts at the bottom-left anchor and is
/// implicitly closed (the first vertex is not repeated).
#[derive(Debug)]
pub struct OrthoOutline2D {
    points: Vec<Point2>,
    params: OutlineParams,
}

impl OrthoOutline2D {
    /// Creates a new outline operation with default parameters.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            params: OutlineParams::default(),
        }
    }

    /// Sets custom outline parameters.
    #[must_use]
    pub fn with_params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the outline construction.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the tolerance is negative or not finite
    /// - `GeometryError::NonFinite` if a coordinate is NaN or infinite
    /// - `GeometryError::Degenerate` if the loop has fewer than
    ///   `min_points` points or a bounding box without area
    /// - `OperationError::InvalidArgument` if the corner anchors are out of
    ///   traversal order, so an arc would have negative length
    #[tracing::instrument(level = "debug", skip_all, fields(points = self.points.len()))]
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let points = self.prepare()?;
        let tol = self.params.tolerance;

        let bbox = BoundingBox2D::new(&points).execute()?;
        if bbox.width() <= tol || bbox.height() <= tol {
            return Err(GeometryError::Degenerate(format!(
                "bounding box {} x {} has no area",
                bbox.width(),
                bbox.height()
            ))
            .into());
        }
        debug!(min = ?bbox.min, max = ?bbox.max, "bounding box");

        let anchors = CornerAnchors::locate(&points, &bbox);
        debug!(?anchors, "corner anchors");

        let rotated = RotatedLoop::new(&points, &anchors, &bbox);
        let mut boundary = Boundary::new(tol);

        let mut bottom = rotated.bottom_arc()?;
        ground_bottom_arc(&mut bottom, bbox.min.y);
        debug!(len = bottom.len(), "bottom arc");
        walk_arc(Edge::Bottom, &bottom, &bbox, &mut boundary);

        let mut right = rotated.right_arc()?;
        // Start from where the bottom walk ended, not from the raw arc end,
        // so a dip below the bottom-right anchor carries into the right side.
        if let (Some(first), Some(joint)) = (right.first_mut(), boundary.last()) {
            *first = joint;
        }
        debug!(len = right.len(), "right arc");
        walk_arc(Edge::Right, &right, &bbox, &mut boundary);

        let top = rotated.top_arc()?;
        debug!(len = top.len(), "top arc");
        walk_arc(Edge::Top, &top, &bbox, &mut boundary);

        let left = rotated.left_arc()?;
        debug!(len = left.len(), "left arc");
        walk_arc(Edge::Left, &left, &bbox, &mut boundary);

        let vertices = boundary.into_vertices();
        debug!(vertices = vertices.len(), "outline complete");
        Ok(vertices)
    }

    /// Validates the input and returns the loop to trace: explicit closing
    /// points removed, counter-clockwise when winding normalization is on.
    fn prepare(&self) -> Result<Vec<Point2>> {
        let tol = self.params.tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tolerance must be finite and non-negative, got {tol}"
            ))
            .into());
        }

        if let Some(index) = self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::NonFinite { index }.into());
        }

        let mut points = self.points.clone();
        while points.len() > 1 && points_equal(&points[0], &points[points.len() - 1], tol) {
            points.pop();
        }

        if points.len() < self.params.min_points {
            return Err(GeometryError::Degenerate(format!(
                "at least {} points required, got {}",
                self.params.min_points,
                points.len()
            ))
            .into());
        }

        if self.params.normalize_winding && signed_area_2d(&points) < 0.0 {
            debug!("reversing clockwise loop");
            points.reverse();
        }

        Ok(points)
    }
}
