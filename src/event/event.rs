//! Event definitions for the eventq dispatch engine.
//!
//! An [`Event`] describes one `trigger` call: which event fired, the target
//! the queue is bound to, and the caller's payload. Listeners communicate
//! with the dispatcher through its two flags.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// A single occurrence of a named event.
///
/// A fresh `Event` is built for every `trigger`, so flag state never leaks
/// between calls. Both flags only ever move from `false` to `true`.
pub struct Event<T, D = ()> {
    /// Unique ID of this occurrence
    id: Uuid,
    /// Name the event was triggered under
    name: String,
    /// The object the queue is bound to
    target: Rc<T>,
    /// Payload passed to `trigger`
    data: Option<D>,
    /// Timestamp when the event was created
    timestamp: DateTime<Utc>,
    prevented: Cell<bool>,
    halted: Cell<bool>,
}

impl<T, D> Event<T, D> {
    /// Create a new event
    pub fn new(name: impl Into<String>, target: Rc<T>, data: Option<D>) -> Self {
        Event {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            data,
            timestamp: Utc::now(),
            prevented: Cell::new(false),
            halted: Cell::new(false),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound target of the queue that created this event
    pub fn target(&self) -> &Rc<T> {
        &self.target
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Suppress the default listener for this trigger call.
    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn is_prevented(&self) -> bool {
        self.prevented.get()
    }

    /// Stop the remaining dynamic listeners and the default listener.
    pub fn halt(&self) {
        self.halted.set(true);
    }

    pub fn is_halted(&self) -> bool {
        self.halted.get()
    }
}

impl<T, D> fmt::Debug for Event<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("timestamp", &self.timestamp)
            .field("prevented", &self.prevented.get())
            .field("halted", &self.halted.get())
            .finish_non_exhaustive()
    }
}
