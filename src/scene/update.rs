use super::{NodeId, Scene};
use crate::{layout::Invalidation, signals::LayoutEvent};

impl Scene {
    pub fn update(&mut self, time: f64) {
        self.time = time;
        let root = self.root;
        log::trace!("update pass at t={time}");
        self.update_subtree(root);
    }

    pub(crate) fn update_subtree(&mut self, id: NodeId) {
        if self.is_container(id) {
            self.update_children_life(id);

            // snapshot: life bookkeeping may have dropped children
            let alive: Vec<NodeId> = self
                .children(id)
                .iter()
                .copied()
                .filter(|c| self.drawable(*c).is_some_and(|d| d.alive))
                .collect();
            for child in alive {
                self.update_subtree(child);
            }

            if self.require_auto_size(id) {
                self.auto_size(id);
            }
        }

        self.consume_invalidation(id);
    }

    /// Returns whether any child changed alive state.
    pub(crate) fn update_children_life(&mut self, id: NodeId) -> bool {
        let changed = self.base_update_children_life(id);
        if changed && self.is_auto_size(id) {
            self.invalidate(id, Invalidation::SCREEN_SHAPE);
        }
        changed
    }

    fn base_update_children_life(&mut self, id: NodeId) -> bool {
        let time = self.time;
        let mut changed = false;
        let mut expired = Vec::new();

        let count = self.children(id).len();
        for i in 0..count {
            let child = self.children(id)[i];
            let Some(node) = self.node_mut(child) else {
                continue;
            };
            let d = &mut node.drawable;

            let alive = d.lifetime.contains(time);
            if alive != d.alive {
                d.alive = alive;
                changed = true;
                log::trace!("{child:?} alive={alive} at t={time}");
            }
            if !alive && d.remove_when_not_alive && d.lifetime.has_ended(time) {
                expired.push(child);
            }
        }

        for child in expired {
            if self.detach(id, child).is_ok() {
                self.dispose_subtree(child);
                self.bus.emit(LayoutEvent::Expired(child));
                log::debug!("{child:?} expired and was removed from {id:?}");
                changed = true;
            }
        }

        changed
    }
}
