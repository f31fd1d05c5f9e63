//! Outbound lifecycle events
//!
//! Each committed state change appends exactly one event to an ordered
//! queue, emitted synchronously after the change. The host drains the queue
//! via [`crate::engine::AnnotationEngine::take_events`]; there are no
//! re-entrant callbacks, so event order always matches commit order.

use crate::annotation::AnnotationId;
use crate::config::Mode;

/// A lifecycle event, fired at most once per logical action
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// An annotation was created and appended to the collection
    Created(AnnotationId),
    /// An existing annotation was updated
    Updated(AnnotationId),
    /// An annotation was deleted
    Deleted(AnnotationId),
    /// Selection changed (None = cleared)
    SelectionChanged(Option<AnnotationId>),
    /// Convenience aggregate fired alongside create/update/delete
    CollectionChanged,
    /// The active mode changed
    ModeChanged(Mode),
    /// The active category changed (by id; None = no filter)
    CategoryChanged(Option<String>),
    /// Current page changed (0-based)
    PageChanged(u16),
    /// Document finished loading
    DocumentLoaded { page_count: u16 },
}

/// Ordered synchronous event queue
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<EngineEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in commit order
    pub fn take(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
