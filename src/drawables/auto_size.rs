use glam::Vec2;

use crate::{
    layout::{Invalidation, Rect, SizeMode},
    scene::{NodeId, Scene},
    signals::{Callback, LayoutEvent},
};

pub struct AutoSize {
    /// Set by any incoming `SCREEN_SIZE`, cleared by a recompute.
    pub(crate) pending: bool,
    pub(crate) on_auto_size: Vec<Callback>,
}

impl Default for AutoSize {
    fn default() -> Self {
        // nothing has been measured yet
        Self {
            pending: true,
            on_auto_size: Vec::new(),
        }
    }
}

impl std::fmt::Debug for AutoSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoSize")
            .field("pending", &self.pending)
            .field("observers", &self.on_auto_size.len())
            .finish()
    }
}

impl Scene {
    pub fn is_auto_size(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.auto_size().is_some())
    }

    /// Raw pending flag, regardless of the node's size mode.
    pub fn is_auto_size_pending(&self, id: NodeId) -> bool {
        self.node(id)
            .and_then(|n| n.auto_size())
            .is_some_and(|a| a.pending)
    }

    /// Whether the next update pass recomputes this container's size.
    pub fn require_auto_size(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| {
            let pending = n.auto_size().is_some_and(|a| a.pending);
            pending && n.drawable.size_mode != SizeMode::XY
        })
    }

    pub fn has_defined_size(&self, id: NodeId) -> bool {
        !self.require_auto_size(id)
    }

    pub fn on_auto_size(&mut self, id: NodeId, f: impl FnMut() + 'static) -> bool {
        match self.node_mut(id).and_then(|n| n.auto_size_mut()) {
            Some(auto) => {
                auto.on_auto_size.push(Box::new(f));
                true
            }
            None => false,
        }
    }

    // Children were updated first. Axes this container inherits come from its
    // own parent, never from the children.
    pub(crate) fn auto_size_bounds(&self, id: NodeId) -> Rect {
        let Some(node) = self.node(id) else {
            return Rect::default();
        };
        let mode = node.drawable.size_mode;
        if mode == SizeMode::XY {
            return self.draw_quad(id);
        }

        let content_scale = self.content_scale(id);
        let mut size = Vec2::ZERO;
        let mut max_inheriting_size = Vec2::ONE;

        for &child in node.children() {
            let Some(c) = self.drawable(child) else {
                continue;
            };
            if !c.is_visible() {
                continue;
            }

            let bounding = self.bounding_size(child, id);
            let inheriting = c.size * c.scale * content_scale;

            if c.size_mode.inherits_x() {
                max_inheriting_size.x = max_inheriting_size.x.max(inheriting.x);
            } else {
                size.x = size.x.max(bounding.x);
            }
            if c.size_mode.inherits_y() {
                max_inheriting_size.y = max_inheriting_size.y.max(inheriting.y);
            } else {
                size.y = size.y.max(bounding.y);
            }
        }

        // nothing with a size of its own: fall back to the parent
        let parent = node.parent.map_or(Vec2::ZERO, |p| self.actual_size(p));
        if size.x == 0.0 {
            size.x = parent.x;
        }
        if size.y == 0.0 {
            size.y = parent.y;
        }

        let size = mode.select(self.actual_size(id), size);
        Rect::from_size(size * max_inheriting_size)
    }

    pub(crate) fn auto_size(&mut self, id: NodeId) {
        let bounds = self.bounding_size(id, id);
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let d = &mut node.drawable;
        let size = d.size_mode.select(d.size, bounds);
        log::debug!("auto-size {id:?}: {:?} -> {size:?}", d.size);
        d.size = size;

        // raised even when the size did not change: children may still have
        // moved
        node.invalid.remove(Invalidation::SCREEN_SHAPE);
        self.invalidate_remeasured(id);

        if let Some(auto) = self.node_mut(id).and_then(|n| n.auto_size_mut()) {
            auto.pending = false;
            for callback in auto.on_auto_size.iter_mut() {
                callback();
            }
        }
        self.bus.emit(LayoutEvent::AutoSized(id));
    }
}
