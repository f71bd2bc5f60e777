pub mod error;
pub mod math;
pub mod operations;

pub use error::{Result, StairlineError};
pub use operations::{OrthoOutline2D, OutlineParams};
