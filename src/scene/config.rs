use glam::{Vec2, vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub name: String,
    pub size: Vec2,
    pub masking: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            size: vec2(800.0, 600.0),
            masking: false,
        }
    }
}

impl SceneConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = vec2(width, height);
        self
    }

    pub fn with_masking(mut self, masking: bool) -> Self {
        self.masking = masking;
        self
    }
}
