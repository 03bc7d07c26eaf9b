//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Implementations translate goal changes into whatever the embedding
/// application needs (re-rendering a list, scheduling a reminder).
///
/// # Design Rules
///
/// - `emit()` must be fast and must not call back into the goal service
/// - Failure inside a sink must not affect domain operations
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Adapts a closure into a sink, for callback-style observers.
pub struct CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DomainEventSink for CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    fn emit(&self, event: DomainEvent) {
        (self.callback)(&event);
    }
}

/// Sink that keeps every event it receives, in order.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking observer must not make the record unreadable.
    fn guard(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.guard().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        self.guard().push(event);
    }
}
