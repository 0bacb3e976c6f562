//! The dispatch engine.
//!
//! A [`Queue`] lives inside the object it serves (its bound target) and
//! keeps a weak back-reference to it. Owners are normally built with
//! [`Rc::new_cyclic`]:
//!
//! ```
//! use eventq::{Defaults, Queue};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct Door {
//!     open: Cell<bool>,
//!     events: Queue<Door>,
//! }
//!
//! let defaults = Defaults::new()
//!     .with("open", |door: &Door, _| {
//!         door.open.set(true);
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let door = Rc::new_cyclic(|me| Door {
//!     open: Cell::new(false),
//!     events: Queue::new(defaults, me.clone()),
//! });
//!
//! door.events.trigger("open", None).unwrap();
//! assert!(door.open.get());
//! ```

use crate::event::defaults::Defaults;
use crate::event::event::Event;
use crate::event::listener::Listener;
use crate::utils::error::{QueueError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Synchronous event queue bound to a target of type `T`, carrying payloads of type `D`.
pub struct Queue<T, D = ()> {
    /// The bound target; fixed at construction
    parent: Weak<T>,
    /// Dynamic listener chains, in registration order
    listeners: RefCell<HashMap<String, Vec<Listener<T, D>>>>,
    /// Default listeners, one per event name
    defaults: HashMap<String, Listener<T, D>>,
}

impl<T, D> Queue<T, D> {
    /// Create a queue bound to `parent` with a fixed set of default listeners.
    pub fn new(defaults: Defaults<T, D>, parent: Weak<T>) -> Self {
        Queue {
            parent,
            listeners: RefCell::new(HashMap::new()),
            defaults: defaults.into_listeners(),
        }
    }

    /// The bound target.
    pub fn parent(&self) -> Result<Rc<T>> {
        self.parent.upgrade().ok_or_else(|| {
            QueueError::Detached("bound target has been dropped or is not yet constructed".to_string())
        })
    }

    /// Append `listener` to the chain for `event_name`.
    ///
    /// The most recently registered listener runs first on `trigger`. Any
    /// string is a valid event name here, including an empty one; only
    /// [`Defaults`] rejects empty names, since they come from configuration.
    pub fn on<F>(&self, event_name: &str, listener: F) -> &Self
    where
        F: Fn(&T, &Event<T, D>) -> Result<()> + 'static,
    {
        let listener = Listener::new(event_name, Rc::new(listener));
        log::debug!("Registered listener {} for '{}'", listener.id, event_name);
        self.listeners
            .borrow_mut()
            .entry(event_name.to_string())
            .or_default()
            .push(listener);
        self
    }

    /// Remove every dynamic listener for `event_name`, or for all names when `None`.
    ///
    /// Default listeners are never affected.
    pub fn off(&self, event_name: Option<&str>) -> &Self {
        let mut listeners = self.listeners.borrow_mut();
        match event_name {
            Some(name) => {
                if let Some(chain) = listeners.remove(name) {
                    log::debug!("Removed {} listener(s) for '{}'", chain.len(), name);
                }
            }
            None => {
                log::debug!(
                    "Removed all listeners for {} event name(s)",
                    listeners.len()
                );
                listeners.clear();
            }
        }
        self
    }

    /// Dispatch `event_name` synchronously.
    ///
    /// The chain runs newest-first and stops as soon as a listener halts the
    /// event. The default listener runs last unless the event was prevented or
    /// halted. A listener error aborts the dispatch and is returned unchanged.
    pub fn trigger(&self, event_name: &str, data: Option<D>) -> Result<&Self> {
        let target = self.parent()?;
        let event = Event::new(event_name, Rc::clone(&target), data);

        // Snapshot so listeners can call on/off/trigger re-entrantly.
        let chain: Vec<Listener<T, D>> = self
            .listeners
            .borrow()
            .get(event_name)
            .cloned()
            .unwrap_or_default();

        log::trace!(
            "Triggering '{}' ({}) with {} listener(s)",
            event_name,
            event.id(),
            chain.len()
        );

        for listener in chain.iter().rev() {
            Self::invoke(listener, &target, &event)?;
            if event.is_halted() {
                log::trace!("'{}' halted by listener {}", event_name, listener.id);
                break;
            }
        }

        if event.is_prevented() || event.is_halted() {
            log::trace!("Default listener for '{}' suppressed", event_name);
            return Ok(self);
        }

        if let Some(default) = self.defaults.get(event_name) {
            Self::invoke(default, &target, &event)?;
        }

        Ok(self)
    }

    fn invoke(listener: &Listener<T, D>, target: &T, event: &Event<T, D>) -> Result<()> {
        log::trace!("Invoking listener {} for '{}'", listener.id, listener.event_name);
        listener.handle_event(target, event).map_err(|e| {
            log::warn!(
                "Listener {} for '{}' failed: {}",
                listener.id,
                listener.event_name,
                e
            );
            e
        })
    }

    /// Get the number of dynamic listeners for a specific event name
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.borrow().get(event_name).map_or(0, |v| v.len())
    }

    /// Get the total number of dynamic listeners across all event names
    pub fn total_listener_count(&self) -> usize {
        self.listeners.borrow().values().map(|v| v.len()).sum()
    }

    pub fn has_default(&self, event_name: &str) -> bool {
        self.defaults.contains_key(event_name)
    }

    /// Event names that currently have at least one dynamic listener, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.listeners.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl<T, D> fmt::Debug for Queue<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut defaults: Vec<&String> = self.defaults.keys().collect();
        defaults.sort();
        f.debug_struct("Queue")
            .field("listeners", &self.event_names())
            .field("defaults", &defaults)
            .field("attached", &(self.parent.strong_count() > 0))
            .finish()
    }
}
