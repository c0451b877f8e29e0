use glam::Vec2;

use crate::scene::{NodeId, Scene};

impl Scene {
    /// Registers a click handler on a container. Leaves are rejected.
    pub fn on_click(&mut self, id: NodeId, f: impl FnMut() + 'static) -> bool {
        match self.node_mut(id).and_then(|n| n.container.as_mut()) {
            Some(c) => {
                c.on_click.push(Box::new(f));
                true
            }
            None => false,
        }
    }

    pub fn is_clickable(&self, id: NodeId) -> bool {
        self.node(id)
            .and_then(|n| n.container.as_ref())
            .is_some_and(|c| !c.on_click.is_empty())
    }

    pub fn click(&mut self, id: NodeId) -> bool {
        let Some(c) = self.node_mut(id).and_then(|n| n.container.as_mut()) else {
            return false;
        };
        if c.on_click.is_empty() {
            return false;
        }
        for handler in c.on_click.iter_mut() {
            handler();
        }
        log::trace!("click handled by {id:?}");
        true
    }

    /// Topmost visible node under `point`. Later siblings win.
    pub fn hit_test(&self, point: Vec2) -> Option<NodeId> {
        self.hit_node(self.root(), point)
    }

    /// Clicks the nearest clickable ancestor of the node under `point`.
    pub fn click_at(&mut self, point: Vec2) -> Option<NodeId> {
        let mut cur = self.hit_test(point);
        while let Some(id) = cur {
            if self.is_clickable(id) {
                self.click(id);
                return Some(id);
            }
            cur = self.parent(id);
        }
        None
    }

    fn hit_node(&self, id: NodeId, point: Vec2) -> Option<NodeId> {
        if !self.drawable(id)?.is_visible() {
            return None;
        }
        let inside = self.screen_space_draw_quad(id).contains(point);
        if self.masking(id) && !inside {
            return None;
        }

        self.children(id)
            .iter()
            .rev()
            .find_map(|&child| self.hit_node(child, point))
            .or(inside.then_some(id))
    }
}
