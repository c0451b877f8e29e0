use crate::{layout::Rect, scene::NodeId};

/// `clip` is `[min_x, min_y, max_x, max_y]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadInstance {
    pub corners: [[f32; 2]; 4],
    pub clip: [f32; 4],
    pub node: u32,
    pub generation: u32,
}

impl QuadInstance {
    pub const UNCLIPPED: [f32; 4] = [f32::MIN, f32::MIN, f32::MAX, f32::MAX];

    pub fn new(node: NodeId, corners: [glam::Vec2; 4], clip: Option<Rect>) -> Self {
        let clip = clip.map_or(Self::UNCLIPPED, |r| {
            let max = r.max();
            [r.origin.x, r.origin.y, max.x, max.y]
        });
        Self {
            corners: corners.map(|c| c.to_array()),
            clip,
            node: node.index(),
            generation: node.generation(),
        }
    }
}
