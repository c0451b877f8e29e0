use glam::{Affine2, Vec2};

use super::{NodeId, Scene};
use crate::layout::{Quad, Rect, SizeMode};

impl Scene {
    /// Zero on non-inherited axes while an auto-size is pending.
    pub fn actual_size(&self, id: NodeId) -> Vec2 {
        let Some(node) = self.node(id) else {
            return Vec2::ZERO;
        };
        if self.has_defined_size(id) {
            return self.base_actual_size(id);
        }

        let mode = node.drawable.size_mode;
        if mode == SizeMode::NONE {
            return Vec2::ZERO;
        }
        mode.mask(self.base_actual_size(id))
    }

    /// Stored size with inherited axes scaled by the parent's actual size.
    pub fn base_actual_size(&self, id: NodeId) -> Vec2 {
        let Some(node) = self.node(id) else {
            return Vec2::ZERO;
        };
        let d = &node.drawable;
        if d.size_mode == SizeMode::NONE {
            return d.size;
        }

        let parent = node.parent.map_or(Vec2::ZERO, |p| self.actual_size(p));
        d.size_mode.select(parent * d.size, d.size)
    }

    pub fn draw_quad(&self, id: NodeId) -> Rect {
        Rect::from_size(self.actual_size(id))
    }

    /// Local rectangle used when measuring the node's bounds.
    pub fn draw_quad_for_bounds(&self, id: NodeId) -> Rect {
        if self.is_auto_size(id) {
            self.auto_size_bounds(id)
        } else {
            self.draw_quad(id)
        }
    }

    pub fn screen_space_draw_quad(&self, id: NodeId) -> Quad {
        Quad::from(self.draw_quad(id)).transform(&self.screen_transform(id))
    }

    /// Bottom-right of the bounds' AABB in `relative_to`'s space.
    pub fn bounding_size(&self, id: NodeId, relative_to: NodeId) -> Vec2 {
        let quad = Quad::from(self.draw_quad_for_bounds(id))
            .transform(&self.transform_between(id, relative_to));
        quad.bounding_rect().max().max(Vec2::ZERO)
    }

    pub fn local_transform(&self, id: NodeId) -> Affine2 {
        let Some(node) = self.node(id) else {
            return Affine2::IDENTITY;
        };
        let d = &node.drawable;
        let own = Affine2::from_scale_angle_translation(d.scale, d.rotation, d.position);

        let content_scale = node
            .parent
            .and_then(|p| self.node(p))
            .and_then(|p| p.container.as_ref())
            .map(|c| c.content_scale);
        match content_scale {
            Some(scale) => Affine2::from_scale(scale) * own,
            None => own,
        }
    }

    pub fn screen_transform(&self, id: NodeId) -> Affine2 {
        let mut m = self.local_transform(id);
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            m = self.local_transform(p) * m;
            cur = self.parent(p);
        }
        m
    }

    fn transform_between(&self, id: NodeId, relative_to: NodeId) -> Affine2 {
        let mut m = Affine2::IDENTITY;
        let mut cur = Some(id);
        while let Some(n) = cur {
            if n == relative_to {
                return m;
            }
            m = self.local_transform(n) * m;
            cur = self.parent(n);
        }

        // not an ancestor, so `m` is now the full screen transform
        self.screen_transform(relative_to).inverse() * m
    }
}
