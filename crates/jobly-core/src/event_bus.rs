//! Completion queue between spawned requests and the frame loop.
//!
//! Single-threaded (WASM): spawned futures push [`ClientEvent`]s through a
//! shared `Rc<RefCell<_>>`, and the UI drains everything once per frame. No
//! borrow is ever held across an `await`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use jobly_types::event::ClientEvent;

pub struct EventBus<E = ClientEvent> {
    queue: Rc<RefCell<VecDeque<E>>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: E) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<E> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Used as the egui repaint trigger.
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

// Manual impl: cloning the handle must not require `E: Clone`.
impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
