use super::{NodeId, Scene};
use crate::layout::Invalidation;

impl Scene {
    /// Returns `false`, and propagates nothing, when `id` already carries every
    /// flag.
    pub fn invalidate(&mut self, id: NodeId, flags: Invalidation) -> bool {
        self.invalidate_from(id, flags, None, true)
    }

    /// Like [`invalidate`](Self::invalidate) but only marks `id` itself.
    pub fn invalidate_local(&mut self, id: NodeId, flags: Invalidation) -> bool {
        self.invalidate_from(id, flags, None, false)
    }

    pub fn on_invalidate(&mut self, id: NodeId, f: impl FnMut(Invalidation) + 'static) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.on_invalidate.push(Box::new(f));
                true
            }
            None => false,
        }
    }

    pub(crate) fn invalidate_from(
        &mut self,
        id: NodeId,
        flags: Invalidation,
        source: Option<NodeId>,
        propagate: bool,
    ) -> bool {
        self.raise(id, flags, source, propagate, Invalidation::ALL)
    }

    // children only move: inherited sizes are read through the parent on
    // demand, so a child resolved earlier in this pass stays resolved
    pub(crate) fn invalidate_remeasured(&mut self, id: NodeId) -> bool {
        self.raise(
            id,
            Invalidation::SCREEN_SHAPE,
            None,
            true,
            Invalidation::ALL - Invalidation::SCREEN_SIZE,
        )
    }

    fn raise(
        &mut self,
        id: NodeId,
        flags: Invalidation,
        source: Option<NodeId>,
        propagate: bool,
        child_mask: Invalidation,
    ) -> bool {
        if flags.is_empty() {
            return false;
        }
        let Some(node) = self.node_mut(id) else {
            return false;
        };

        // re-armed even when nothing else is new
        if flags.contains(Invalidation::SCREEN_SIZE) {
            if let Some(auto) = node.auto_size_mut() {
                auto.pending = true;
            }
        }

        let fresh = flags - node.invalid;
        if fresh.is_empty() {
            return false;
        }
        node.invalid |= fresh;
        let parent = node.parent;
        log::trace!("invalidate {id:?} {fresh:?}");

        if propagate {
            if let Some(parent) = parent.filter(|p| Some(*p) != source) {
                let effect = self.invalidation_effect_by_children(parent, fresh);
                self.invalidate_from(parent, effect, Some(id), true);
            }

            // propagation never mutates the child list
            let count = self.children(id).len();
            for i in 0..count {
                let child = self.children(id)[i];
                if Some(child) == source {
                    continue;
                }
                let mode = self
                    .drawable(child)
                    .map(|d| d.size_mode)
                    .unwrap_or_default();
                let effect = fresh.effect_on_child(mode) & child_mask;
                self.invalidate_from(child, effect, Some(id), true);
            }
        }

        self.notify_invalidated(id, fresh);
        true
    }

    pub(crate) fn invalidation_effect_by_children(
        &self,
        parent: NodeId,
        child_invalidation: Invalidation,
    ) -> Invalidation {
        match self.node(parent) {
            Some(node) if node.auto_size().is_some() => {
                child_invalidation.effect_on_auto_size_parent()
            }
            _ => child_invalidation.effect_on_plain_parent(),
        }
    }

    fn notify_invalidated(&mut self, id: NodeId, fresh: Invalidation) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        for callback in node.on_invalidate.iter_mut() {
            callback(fresh);
        }
    }

    /// Drops every carried flag. Called once per node by the update pass.
    pub(crate) fn consume_invalidation(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.invalid = Invalidation::empty();
        }
    }
}
