use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        const POSITION = 1 << 0;
        /// The node's own size changed.
        const SCREEN_SIZE = 1 << 1;
        const VISIBILITY = 1 << 2;
        const COLOUR = 1 << 3;

        /// Shape or bounds within the parent changed. Implies a layout pass.
        const SCREEN_SHAPE = Self::POSITION.bits() | Self::SCREEN_SIZE.bits();
        const ALL = Self::SCREEN_SHAPE.bits() | Self::VISIBILITY.bits() | Self::COLOUR.bits();
    }
}

impl Invalidation {
    pub fn effect_on_plain_parent(self) -> Invalidation {
        Invalidation::empty()
    }

    pub fn effect_on_auto_size_parent(self) -> Invalidation {
        if self.intersects(Invalidation::VISIBILITY | Invalidation::SCREEN_SHAPE) {
            Invalidation::SCREEN_SHAPE
        } else {
            self.effect_on_plain_parent()
        }
    }

    /// What a child sees when its parent is invalidated with `self`.
    pub fn effect_on_child(self, child_mode: SizeMode) -> Invalidation {
        let mut effect =
            self & (Invalidation::POSITION | Invalidation::VISIBILITY | Invalidation::COLOUR);

        // the parent's content box moved under every child
        if self.contains(Invalidation::SCREEN_SIZE) {
            effect |= Invalidation::POSITION;
            if child_mode != SizeMode::NONE {
                effect |= Invalidation::SCREEN_SIZE;
            }
        }

        effect
    }
}

bitflags! {
    /// On an inherited axis the stored size is a factor of the parent's size.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SizeMode: u8 {
        const NONE = 0;
        const X = 1 << 0;
        const Y = 1 << 1;
        const XY = Self::X.bits() | Self::Y.bits();
    }
}

impl SizeMode {
    #[inline]
    pub fn inherits_x(self) -> bool {
        self.contains(SizeMode::X)
    }

    #[inline]
    pub fn inherits_y(self) -> bool {
        self.contains(SizeMode::Y)
    }

    /// Per axis: `inherited` where this mode inherits, `own` elsewhere.
    pub fn select(self, inherited: glam::Vec2, own: glam::Vec2) -> glam::Vec2 {
        glam::vec2(
            if self.inherits_x() { inherited.x } else { own.x },
            if self.inherits_y() { inherited.y } else { own.y },
        )
    }

    /// Zeroes the axes this mode does not inherit.
    pub fn mask(self, v: glam::Vec2) -> glam::Vec2 {
        self.select(v, glam::Vec2::ZERO)
    }
}
