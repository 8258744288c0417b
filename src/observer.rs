//! Observer registry for stick movement notifications
//!
//! Handlers are plain `FnMut(Direction, f32)` closures. Everything runs on
//! the GUI thread, so no `Send` bound is required.

use crate::direction::{Direction, StickEvent};
use tracing::trace;

/// Handle returned by [`StickObservers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(Direction, f32)>;

/// Ordered set of `(direction, magnitude)` handlers
#[derive(Default)]
pub struct StickObservers {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl StickObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it is invoked after every later notification
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(Direction, f32) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke every handler synchronously, in subscription order
    pub fn notify(&mut self, event: StickEvent) {
        trace!(
            "stick event {} -> {} observer(s)",
            event,
            self.handlers.len()
        );
        for (_, handler) in &mut self.handlers {
            handler(event.direction, event.magnitude);
        }
    }
}

impl std::fmt::Debug for StickObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickObservers")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
