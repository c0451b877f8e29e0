pub mod config;
pub mod geometry;
pub mod id;
pub mod invalidate;
pub mod update;

pub use config::SceneConfig;
pub use id::NodeId;

use glam::Vec2;
use std::sync::mpsc::Receiver;

use crate::{
    drawables::{AutoSize, Container, Drawable, Lifetime},
    layout::{Invalidation, SizeMode},
    signals::{EventBus, InvalidateCallback, LayoutEvent},
};

pub(crate) struct Node {
    pub(crate) drawable: Drawable,
    pub(crate) parent: Option<NodeId>,
    /// Flags raised since the last update pass visited this node.
    pub(crate) invalid: Invalidation,
    pub(crate) container: Option<Container>,
    pub(crate) on_invalidate: Vec<InvalidateCallback>,
}

impl Node {
    fn new(drawable: Drawable, container: Option<Container>) -> Self {
        Self {
            drawable,
            parent: None,
            invalid: Invalidation::empty(),
            container,
            on_invalidate: Vec::new(),
        }
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match &self.container {
            Some(c) => c.children.as_slice(),
            None => &[],
        }
    }

    pub(crate) fn auto_size(&self) -> Option<&AutoSize> {
        self.container.as_ref().and_then(|c| c.auto_size.as_ref())
    }

    pub(crate) fn auto_size_mut(&mut self) -> Option<&mut AutoSize> {
        self.container.as_mut().and_then(|c| c.auto_size.as_mut())
    }
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    config: SceneConfig,
    time: f64,
    pub(crate) bus: EventBus,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                idx: 0,
                generation: 0,
            },
            config,
            time: 0.0,
            bus: EventBus::default(),
        };

        let root = Drawable::new()
            .with_name(scene.config.name.clone())
            .with_size(scene.config.size);
        let container = Container::new().with_masking(scene.config.masking);
        scene.root = scene.insert_container(root, container);
        log::debug!(
            "scene created: {} {:?}",
            scene.config.name,
            scene.config.size
        );
        scene
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn insert(&mut self, drawable: Drawable) -> NodeId {
        self.alloc(Node::new(drawable, None))
    }

    pub fn insert_container(&mut self, drawable: Drawable, container: Container) -> NodeId {
        self.alloc(Node::new(drawable, Some(container)))
    }

    pub fn insert_auto_size(&mut self, drawable: Drawable) -> NodeId {
        self.insert_container(drawable, Container::auto_sized())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn drawable(&self, id: NodeId) -> Option<&Drawable> {
        self.node(id).map(|n| &n.drawable)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn is_container(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.container.is_some())
    }

    pub fn invalidation(&self, id: NodeId) -> Invalidation {
        self.node(id).map_or(Invalidation::empty(), |n| n.invalid)
    }

    pub fn subscribe(&mut self) -> Receiver<LayoutEvent> {
        self.bus.subscribe()
    }

    // -- Drawable setters --

    pub fn set_position(&mut self, id: NodeId, position: Vec2) -> bool {
        self.update_drawable(id, Invalidation::POSITION, |d| {
            std::mem::replace(&mut d.position, position) != position
        })
    }

    pub fn set_size(&mut self, id: NodeId, size: Vec2) -> bool {
        self.update_drawable(id, Invalidation::SCREEN_SIZE, |d| {
            std::mem::replace(&mut d.size, size) != size
        })
    }

    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) -> bool {
        self.update_drawable(id, Invalidation::SCREEN_SHAPE, |d| {
            std::mem::replace(&mut d.scale, scale) != scale
        })
    }

    /// Rotation in radians around the node's top-left corner.
    pub fn set_rotation(&mut self, id: NodeId, rotation: f32) -> bool {
        self.update_drawable(id, Invalidation::SCREEN_SHAPE, |d| {
            std::mem::replace(&mut d.rotation, rotation) != rotation
        })
    }

    pub fn set_size_mode(&mut self, id: NodeId, mode: SizeMode) -> bool {
        self.update_drawable(id, Invalidation::SCREEN_SIZE, |d| {
            std::mem::replace(&mut d.size_mode, mode) != mode
        })
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> bool {
        self.update_drawable(id, Invalidation::VISIBILITY, |d| {
            std::mem::replace(&mut d.shown, visible) != visible
        })
    }

    /// Takes effect on the next update pass.
    pub fn set_lifetime(&mut self, id: NodeId, lifetime: Lifetime) -> bool {
        self.update_drawable(id, Invalidation::empty(), |d| {
            d.lifetime = lifetime;
            false
        })
    }

    pub fn set_remove_when_not_alive(&mut self, id: NodeId, remove: bool) -> bool {
        self.update_drawable(id, Invalidation::empty(), |d| {
            d.remove_when_not_alive = remove;
            false
        })
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> bool {
        let name = name.into();
        self.update_drawable(id, Invalidation::empty(), |d| {
            d.name = Some(name);
            false
        })
    }

    fn update_drawable(
        &mut self,
        id: NodeId,
        flags: Invalidation,
        apply: impl FnOnce(&mut Drawable) -> bool,
    ) -> bool {
        let Some(node) = self.node_mut(id) else {
            log::debug!("ignoring update of stale node {id:?}");
            return false;
        };
        if apply(&mut node.drawable) {
            self.invalidate(id, flags);
        }
        true
    }

    // -- Slots --

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.idx as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.idx as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId {
                idx,
                generation: slot.generation,
            }
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId { idx, generation: 0 }
        }
    }

    /// Frees `id` and everything below it. The caller unlinks `id` first.
    pub(crate) fn dispose_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(next.idx as usize)
                .filter(|s| s.generation == next.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                stack.extend_from_slice(node.children());
                self.free.push(next.idx);
                log::trace!("disposed {next:?}");
            }
        }
    }
}
