pub mod auto_size;
pub mod clickable;
pub mod container;
pub mod drawable;

pub use auto_size::AutoSize;
pub use container::{ChildList, Container};
pub use drawable::{Drawable, Lifetime};
