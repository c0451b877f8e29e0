pub mod dirty;
pub mod rect;

pub use dirty::{Invalidation, SizeMode};
pub use rect::{Quad, Rect};
