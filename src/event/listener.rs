//! Event listener definitions for eventq.
//!
//! This module defines the listener record and callback type shared by
//! dynamic listeners, default listeners and the handler registry.

use crate::event::event::Event;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::rc::Rc;
use uuid::Uuid;

/// Type alias for listener callback functions.
///
/// The bound target comes first and plays the role of the receiver.
pub type ListenerCallback<T, D> = Rc<dyn Fn(&T, &Event<T, D>) -> Result<()>>;

/// One registered listener.
pub struct Listener<T, D> {
    /// Unique ID of the listener
    pub id: Uuid,
    /// Name of the event this listener is attached to
    pub event_name: String,
    /// Callback function to execute when the event fires
    pub callback: ListenerCallback<T, D>,
}

impl<T, D> Listener<T, D> {
    /// Create a new listener
    pub fn new(event_name: impl Into<String>, callback: ListenerCallback<T, D>) -> Self {
        Listener {
            id: Uuid::new_v4(),
            event_name: event_name.into(),
            callback,
        }
    }

    /// Invoke the callback with `target` as receiver.
    pub fn handle_event(&self, target: &T, event: &Event<T, D>) -> Result<()> {
        (self.callback)(target, event)
    }
}

impl<T, D> Clone for Listener<T, D> {
    fn clone(&self) -> Self {
        Listener {
            id: self.id,
            event_name: self.event_name.clone(),
            callback: Rc::clone(&self.callback),
        }
    }
}

/// Named handler functions that configuration files refer to.
pub struct HandlerRegistry<T, D = ()> {
    handlers: HashMap<String, ListenerCallback<T, D>>,
}

impl<T, D> HandlerRegistry<T, D> {
    pub fn new() -> Self {
        HandlerRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any earlier handler of that name.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&T, &Event<T, D>) -> Result<()> + 'static,
    {
        self.handlers.insert(name.into(), Rc::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ListenerCallback<T, D>> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T, D> Default for HandlerRegistry<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QueueError;
    use std::cell::Cell;

    #[test]
    fn test_handle_event_passes_target_and_event() {
        let seen = Rc::new(Cell::new(0u32));
        let seen_clone = seen.clone();
        let listener: Listener<u32, ()> = Listener::new(
            "bump",
            Rc::new(move |target: &u32, event: &Event<u32>| {
                assert_eq!(event.name(), "bump");
                seen_clone.set(*target);
                Ok(())
            }),
        );

        let target = Rc::new(7u32);
        let event = Event::new("bump", target.clone(), None);
        listener.handle_event(&target, &event).unwrap();
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_handle_event_returns_listener_error() {
        let listener: Listener<(), ()> = Listener::new(
            "fail",
            Rc::new(|_: &(), _: &Event<()>| Err(QueueError::Listener("boom".to_string()))),
        );
        let target = Rc::new(());
        let event = Event::new("fail", target.clone(), None);

        match listener.handle_event(&target, &event) {
            Err(QueueError::Listener(msg)) => assert_eq!(msg, "boom"),
            other => panic!("Expected listener error, got {:?}", other),
        }
    }

    #[test]
    fn test_cloned_listener_keeps_id() {
        let listener: Listener<(), ()> = Listener::new("a", Rc::new(|_: &(), _: &Event<()>| Ok(())));
        let clone = listener.clone();
        assert_eq!(listener.id, clone.id);
        assert!(Rc::ptr_eq(&listener.callback, &clone.callback));
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry: HandlerRegistry<(), ()> = HandlerRegistry::new();
        assert!(registry.is_empty());

        registry
            .register("noop", |_, _| Ok(()))
            .register("other", |_, _| Ok(()));

        assert_eq!(registry.len(), 2);
        assert!(registry.get("noop").is_some());
        assert!(registry.get("missing").is_none());
    }
}
