pub mod outline;
pub mod query;
pub mod transform;

pub use outline::{OrthoOutline2D, OutlineParams};
