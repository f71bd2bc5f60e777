use crate::error::Result;
use crate::math::range::extract_range;
use crate::math::Point2;
use crate::operations::query::Aabb2;

use super::anchors::CornerAnchors;

/// The input loop rotated to start at the bottom-left anchor, with the
/// top-left anchor snapped onto the bounding-box corner.
///
/// Anchor positions are carried over from the unrotated loop by index
/// arithmetic.
#[derive(Debug, Clone)]
pub(crate) struct RotatedLoop {
    points: Vec<Point2>,
    bottom_right: usize,
    top_right: usize,
    top_left: usize,
}

impl RotatedLoop {
    /// `points` must be non-empty and `anchors` must index into it.
    pub(crate) fn new(points: &[Point2], anchors: &CornerAnchors, bbox: &Aabb2) -> Self {
        let n = points.len();
        let start = anchors.bottom_left;
        let shift = |i: usize| (i + n - start) % n;

        let mut rotated = Vec::with_capacity(n);
        rotated.extend_from_slice(&points[start..]);
        rotated.extend_from_slice(&points[..start]);

        let top_left = shift(anchors.top_left);
        rotated[top_left] = bbox.top_left();

        Self {
            points: rotated,
            bottom_right: shift(anchors.bottom_right),
            top_right: shift(anchors.top_right),
            top_left,
        }
    }

    #[cfg(test)]
    pub(crate) fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Start of the loop through the bottom-right anchor.
    pub(crate) fn bottom_arc(&self) -> Result<Vec<Point2>> {
        self.arc(0, self.bottom_right)
    }

    /// Bottom-right anchor through the top-right anchor.
    pub(crate) fn right_arc(&self) -> Result<Vec<Point2>> {
        self.arc(self.bottom_right, self.top_right)
    }

    /// Top-right anchor through the snapped top-left anchor.
    pub(crate) fn top_arc(&self) -> Result<Vec<Point2>> {
        self.arc(self.top_right, self.top_left)
    }

    /// Top-left anchor through the end of the loop, closed by the start point.
    pub(crate) fn left_arc(&self) -> Result<Vec<Point2>> {
        let mut arc = self.arc(self.top_left, self.points.len() - 1)?;
        arc.push(self.points[0]);
        Ok(arc)
    }

    /// Inclusive arc `from..=to`.
    ///
    /// Fails with the range extractor's error when `to` precedes `from` by
    /// more than one position.
    fn arc(&self, from: usize, to: usize) -> Result<Vec<Point2>> {
        let (start, length) = inclusive_span(from, to);
        Ok(extract_range(&self.points, start, length)?.to_vec())
    }
}

/// Start and length of the inclusive range `from..=to`.
#[allow(clippy::cast_possible_wrap)]
fn inclusive_span(from: usize, to: usize) -> (isize, isize) {
    let start = from as isize;
    (start, to as isize - start + 1)
}

/// Forces the last point of the bottom arc onto the bottom edge when it
/// ends above where the arc started.
pub(crate) fn ground_bottom_arc(arc: &mut [Point2], min_y: f64) {
    let Some(start_y) = arc.first().map(|p| p.y) else {
        return;
    };
    if let Some(end) = arc.last_mut() {
        if end.y > start_y {
            end.y = min_y;
        }
    }
}
