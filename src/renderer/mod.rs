pub mod primatives;

pub use primatives::QuadInstance;

use crate::{
    layout::{Quad, Rect},
    scene::{NodeId, Scene},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawNode {
    pub node: NodeId,
    pub quad: Quad,
    /// Set on masking containers: the screen rectangle their subtree is cut to.
    pub clip: Option<Rect>,
    pub children: Vec<DrawNode>,
}

impl DrawNode {
    /// Depth-first, parents first. Nested clips intersect.
    pub fn flatten(&self) -> Vec<QuadInstance> {
        let mut out = Vec::new();
        let mut clips = Vec::new();
        self.flatten_into(&mut out, &mut clips);
        out
    }

    fn flatten_into(&self, out: &mut Vec<QuadInstance>, clips: &mut Vec<Rect>) {
        let pushed = match (self.clip, clips.last()) {
            (Some(own), Some(outer)) => {
                clips.push(own.intersection(outer));
                true
            }
            (Some(own), None) => {
                clips.push(own);
                true
            }
            (None, _) => false,
        };

        out.push(QuadInstance::new(
            self.node,
            self.quad.corners(),
            clips.last().copied(),
        ));
        for child in &self.children {
            child.flatten_into(out, clips);
        }

        if pushed {
            clips.pop();
        }
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(DrawNode::count).sum::<usize>()
    }
}

impl Scene {
    pub fn draw(&self) -> Option<DrawNode> {
        self.draw_node(self.root())
    }

    pub fn draw_node(&self, id: NodeId) -> Option<DrawNode> {
        if !self.drawable(id)?.is_visible() {
            return None;
        }
        let quad = self.screen_space_draw_quad(id);
        let clip = self.masking(id).then(|| quad.bounding_rect());
        let children = self
            .children(id)
            .iter()
            .filter_map(|&child| self.draw_node(child))
            .collect();

        Some(DrawNode {
            node: id,
            quad,
            clip,
            children,
        })
    }

    pub fn frame(&mut self, time: f64) -> Option<DrawNode> {
        self.update(time);
        self.draw()
    }
}
