pub mod distance_2d;
pub mod polygon_2d;
pub mod range;

use approx::RelativeEq;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for point equality, relative and absolute.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if both coordinates of `a` and `b` agree within `tolerance`.
///
/// The comparison is relative for large coordinates and absolute near zero,
/// so `1e6 + 1e-4` and `1e6` compare equal at the default tolerance.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    a.relative_eq(b, tolerance, tolerance)
}
