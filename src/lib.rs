pub mod debug;
pub mod drawables;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod signals;

pub use drawables::{Container, Drawable, Lifetime};
pub use error::SceneError;
pub use layout::{Invalidation, Quad, Rect, SizeMode};
pub use renderer::{DrawNode, QuadInstance};
pub use scene::{NodeId, Scene, SceneConfig};
pub use signals::LayoutEvent;

pub use glam::{Affine2, Vec2, vec2};

pub type Result<T> = std::result::Result<T, SceneError>;

pub fn init_logging() {
    env_logger::init();
}
