mod bounding_box;
mod encloses;

pub use bounding_box::{Aabb2, BoundingBox2D};
pub use encloses::Encloses;
