use glam::Vec2;

use crate::layout::SizeMode;

/// `[start, end)` in scene time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    pub start: f64,
    pub end: f64,
}

impl Lifetime {
    pub const FOREVER: Lifetime = Lifetime {
        start: f64::NEG_INFINITY,
        end: f64::INFINITY,
    };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    pub fn has_ended(&self, time: f64) -> bool {
        time >= self.end
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::FOREVER
    }
}

/// Once inserted, change it through the [`Scene`](crate::Scene) setters so
/// the change is invalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub(crate) name: Option<String>,
    pub(crate) position: Vec2,
    pub(crate) size: Vec2,
    pub(crate) scale: Vec2,
    pub(crate) rotation: f32,
    pub(crate) size_mode: SizeMode,
    pub(crate) shown: bool,
    pub(crate) alive: bool,
    pub(crate) lifetime: Lifetime,
    pub(crate) remove_when_not_alive: bool,
}

impl Default for Drawable {
    fn default() -> Self {
        Self {
            name: None,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            size_mode: SizeMode::NONE,
            shown: true,
            alive: true,
            lifetime: Lifetime::FOREVER,
            remove_when_not_alive: false,
        }
    }
}

impl Drawable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size_mode(mut self, mode: SizeMode) -> Self {
        self.size_mode = mode;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.shown = false;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_remove_when_not_alive(mut self, remove: bool) -> Self {
        self.remove_when_not_alive = remove;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Stored size. On inherited axes this is a factor of the parent's size.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_visible(&self) -> bool {
        self.shown && self.alive
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    pub fn removes_when_not_alive(&self) -> bool {
        self.remove_when_not_alive
    }
}
