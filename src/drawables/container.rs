use glam::Vec2;

use super::{AutoSize, Drawable};
use crate::{
    Result,
    error::SceneError,
    layout::Invalidation,
    scene::{NodeId, Scene},
    signals::Callback,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChildList(Vec<NodeId>);

impl ChildList {
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> bool {
        match self.0.iter().position(|c| *c == id) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }
}

pub struct Container {
    pub(crate) children: ChildList,
    pub(crate) masking: bool,
    /// Scale applied to children only, never to the container's own bounds.
    pub(crate) content_scale: Vec2,
    pub(crate) auto_size: Option<AutoSize>,
    pub(crate) on_click: Vec<Callback>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            children: ChildList::default(),
            masking: false,
            content_scale: Vec2::ONE,
            auto_size: None,
            on_click: Vec::new(),
        }
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("children", &self.children)
            .field("masking", &self.masking)
            .field("content_scale", &self.content_scale)
            .field("auto_size", &self.auto_size)
            .finish_non_exhaustive()
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_sized() -> Self {
        Self {
            auto_size: Some(AutoSize::default()),
            ..Self::default()
        }
    }

    pub fn with_masking(mut self, masking: bool) -> Self {
        self.masking = masking;
        self
    }

    pub fn with_content_scale(mut self, scale: Vec2) -> Self {
        self.content_scale = scale;
        self
    }
}

impl Scene {
    pub fn children(&self, parent: NodeId) -> &[NodeId] {
        self.node(parent).map_or(&[][..], |n| n.children())
    }

    /// Appends `child` to `parent`. Returns `None` when the tree rejects it.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Option<NodeId> {
        self.try_add(parent, child)
            .map_err(|e| log::debug!("add rejected: {e}"))
            .ok()
    }

    pub fn try_add(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId> {
        self.attach(parent, child)?;
        self.invalidate(parent, Invalidation::SCREEN_SHAPE);
        Ok(child)
    }

    pub fn add_range(
        &mut self,
        parent: NodeId,
        children: impl IntoIterator<Item = NodeId>,
    ) -> usize {
        let mut added = 0;
        for child in children {
            match self.attach(parent, child) {
                Ok(()) => added += 1,
                Err(e) => log::debug!("add rejected: {e}"),
            }
        }
        if added > 0 {
            self.invalidate(parent, Invalidation::SCREEN_SHAPE);
        }
        added
    }

    /// Detaches `child` from `parent`, freeing its subtree when `dispose` is set.
    pub fn remove(&mut self, parent: NodeId, child: NodeId, dispose: bool) -> bool {
        self.try_remove(parent, child, dispose)
            .map_err(|e| log::debug!("remove rejected: {e}"))
            .is_ok()
    }

    pub fn try_remove(&mut self, parent: NodeId, child: NodeId, dispose: bool) -> Result<()> {
        self.detach(parent, child)?;
        if dispose {
            self.dispose_subtree(child);
        }
        self.invalidate(parent, Invalidation::SCREEN_SHAPE);
        Ok(())
    }

    pub fn remove_range(
        &mut self,
        parent: NodeId,
        children: impl IntoIterator<Item = NodeId>,
        dispose: bool,
    ) -> usize {
        let mut removed = 0;
        for child in children {
            match self.detach(parent, child) {
                Ok(()) => {
                    if dispose {
                        self.dispose_subtree(child);
                    }
                    removed += 1;
                }
                Err(e) => log::debug!("remove rejected: {e}"),
            }
        }
        if removed > 0 {
            self.invalidate(parent, Invalidation::SCREEN_SHAPE);
        }
        removed
    }

    /// Removes and disposes every child matching `predicate`.
    pub fn remove_all(
        &mut self,
        parent: NodeId,
        mut predicate: impl FnMut(&Drawable) -> bool,
    ) -> usize {
        let matching: Vec<NodeId> = self
            .children(parent)
            .iter()
            .copied()
            .filter(|c| self.drawable(*c).is_some_and(&mut predicate))
            .collect();
        self.remove_range(parent, matching, true)
    }

    pub fn clear(&mut self, parent: NodeId, dispose: bool) -> usize {
        let all = self.children(parent).to_vec();
        self.remove_range(parent, all, dispose)
    }

    /// Children kept in the new set are only detached, the rest are disposed.
    pub fn set_children(
        &mut self,
        parent: NodeId,
        children: impl IntoIterator<Item = NodeId>,
    ) -> usize {
        let incoming: Vec<NodeId> = children.into_iter().collect();
        let current = self.children(parent).to_vec();
        for child in current {
            if self.detach(parent, child).is_ok() && !incoming.contains(&child) {
                self.dispose_subtree(child);
            }
        }

        let mut added = 0;
        for child in incoming {
            match self.attach(parent, child) {
                Ok(()) => added += 1,
                Err(e) => log::debug!("add rejected: {e}"),
            }
        }
        self.invalidate(parent, Invalidation::SCREEN_SHAPE);
        added
    }

    /// Unlinks `id` from its parent, if any, and frees its subtree.
    pub fn dispose(&mut self, id: NodeId) -> bool {
        if id == self.root() || !self.contains(id) {
            return false;
        }
        if let Some(parent) = self.parent(id) {
            return self.remove(parent, id, true);
        }
        self.dispose_subtree(id);
        true
    }

    pub fn masking(&self, id: NodeId) -> bool {
        self.node(id)
            .and_then(|n| n.container.as_ref())
            .is_some_and(|c| c.masking)
    }

    pub fn set_masking(&mut self, id: NodeId, masking: bool) -> bool {
        match self.node_mut(id).and_then(|n| n.container.as_mut()) {
            Some(c) => {
                c.masking = masking;
                true
            }
            None => false,
        }
    }

    pub fn content_scale(&self, id: NodeId) -> Vec2 {
        self.node(id)
            .and_then(|n| n.container.as_ref())
            .map_or(Vec2::ONE, |c| c.content_scale)
    }

    pub fn set_content_scale(&mut self, id: NodeId, scale: Vec2) -> bool {
        let Some(c) = self.node_mut(id).and_then(|n| n.container.as_mut()) else {
            return false;
        };
        if std::mem::replace(&mut c.content_scale, scale) != scale {
            self.invalidate(id, Invalidation::SCREEN_SHAPE);
        }
        true
    }

    /// Links `child` under `parent` without touching the parent's flags.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(child) {
            return Err(SceneError::StaleNode(child));
        }
        if child == self.root() {
            return Err(SceneError::RootImmutable);
        }
        match self.node(parent) {
            None => return Err(SceneError::StaleNode(parent)),
            Some(n) if n.container.is_none() => return Err(SceneError::NotAContainer(parent)),
            Some(_) => {}
        }
        if let Some(current) = self.parent(child) {
            return Err(SceneError::AlreadyParented { child, parent: current });
        }

        let mut cur = Some(parent);
        while let Some(n) = cur {
            if n == child {
                return Err(SceneError::WouldCycle { parent, child });
            }
            cur = self.parent(n);
        }

        if let Some(c) = self.node_mut(parent).and_then(|n| n.container.as_mut()) {
            c.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
            node.invalid = Invalidation::empty();
        }
        log::trace!("attached {child:?} to {parent:?}");

        // everything about the child is new in its new parent
        self.invalidate_from(child, Invalidation::ALL, Some(parent), true);
        Ok(())
    }

    pub(crate) fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(child) {
            return Err(SceneError::StaleNode(child));
        }
        let Some(c) = self.node_mut(parent).map(|n| n.container.as_mut()) else {
            return Err(SceneError::StaleNode(parent));
        };
        let Some(c) = c else {
            return Err(SceneError::NotAContainer(parent));
        };
        if !c.children.remove(child) {
            return Err(SceneError::NotAChild { parent, child });
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
        log::trace!("detached {child:?} from {parent:?}");
        Ok(())
    }
}
