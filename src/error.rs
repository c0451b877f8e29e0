use thiserror::Error;

use crate::scene::NodeId;

/// Why the scene rejected a structural change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("{0:?} does not exist in this scene")]
    StaleNode(NodeId),

    #[error("{0:?} is not a container")]
    NotAContainer(NodeId),

    #[error("{child:?} already belongs to {parent:?}")]
    AlreadyParented { child: NodeId, parent: NodeId },

    #[error("adding {child:?} under {parent:?} would make it its own ancestor")]
    WouldCycle { parent: NodeId, child: NodeId },

    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("the root cannot be reparented")]
    RootImmutable,
}
