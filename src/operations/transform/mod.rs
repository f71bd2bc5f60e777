mod translate;

pub use translate::Translate2D;
