use std::sync::mpsc;

use crate::{layout::Invalidation, scene::NodeId};

pub type Callback = Box<dyn FnMut()>;
pub type InvalidateCallback = Box<dyn FnMut(Invalidation)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// An auto-sizing container committed a new size.
    AutoSized(NodeId),
    /// A child outlived its lifetime and was disposed.
    Expired(NodeId),
}

#[derive(Default)]
pub(crate) struct EventBus {
    subscribers: Vec<mpsc::Sender<LayoutEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> mpsc::Receiver<LayoutEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: LayoutEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
