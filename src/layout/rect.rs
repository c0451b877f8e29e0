use glam::{Affine2, Vec2};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min, (max - min).max(Vec2::ZERO))
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.origin;
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (a0, a1) = (self.origin, self.max());
        let (b0, b1) = (other.origin, other.max());
        a0.x <= b1.x && b0.x <= a1.x && a0.y <= b1.y && b0.y <= a1.y
    }

    pub fn intersection(&self, other: &Rect) -> Rect {
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        Rect::from_min_max(min, max.max(min))
    }
}

/// Four corners of a possibly rotated rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Quad {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Quad {
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    pub fn transform(&self, m: &Affine2) -> Quad {
        Quad {
            top_left: m.transform_point2(self.top_left),
            top_right: m.transform_point2(self.top_right),
            bottom_left: m.transform_point2(self.bottom_left),
            bottom_right: m.transform_point2(self.bottom_right),
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        let c = self.corners();
        let min = c.iter().fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p));
        let max = c
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |acc, p| acc.max(*p));
        Rect::from_min_max(min, max)
    }

    /// Point-in-quad test for convex quads with either winding.
    pub fn contains(&self, p: Vec2) -> bool {
        let c = self.corners();
        let mut sign = 0.0f32;
        for i in 0..4 {
            let a = c[i];
            let b = c[(i + 1) % 4];
            let cross = (b - a).perp_dot(p - a);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        // a degenerate quad covers no area
        sign != 0.0
    }
}

impl From<Rect> for Quad {
    fn from(r: Rect) -> Self {
        let max = r.max();
        Quad {
            top_left: r.origin,
            top_right: Vec2::new(max.x, r.origin.y),
            bottom_left: Vec2::new(r.origin.x, max.y),
            bottom_right: max,
        }
    }
}
