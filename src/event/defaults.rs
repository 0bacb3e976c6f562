//! Default listeners, fixed when a queue is constructed.

use crate::config::config::validate_event_name;
use crate::config::DefaultsConfig;
use crate::event::event::Event;
use crate::event::listener::{HandlerRegistry, Listener};
use crate::utils::error::{QueueError, Result};
use std::collections::HashMap;
use std::rc::Rc;

/// At most one default listener per event name.
///
/// Handed to [`Queue::new`](crate::event::Queue::new) by value; the queue
/// offers no way to change its defaults afterwards.
pub struct Defaults<T, D = ()> {
    listeners: HashMap<String, Listener<T, D>>,
}

impl<T, D> Defaults<T, D> {
    pub fn new() -> Self {
        Defaults {
            listeners: HashMap::new(),
        }
    }

    /// Set the default listener for `event_name`, replacing an earlier one.
    pub fn insert<F>(&mut self, event_name: &str, handler: F) -> Result<&mut Self>
    where
        F: Fn(&T, &Event<T, D>) -> Result<()> + 'static,
    {
        validate_event_name(event_name)?;
        self.listeners.insert(
            event_name.to_string(),
            Listener::new(event_name, Rc::new(handler)),
        );
        Ok(self)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<F>(mut self, event_name: &str, handler: F) -> Result<Self>
    where
        F: Fn(&T, &Event<T, D>) -> Result<()> + 'static,
    {
        self.insert(event_name, handler)?;
        Ok(self)
    }

    /// Resolve every handler name in `config` against `registry`.
    pub fn from_config(config: &DefaultsConfig, registry: &HandlerRegistry<T, D>) -> Result<Self> {
        let mut defaults = Defaults::new();
        for (event_name, handler_name) in &config.defaults {
            validate_event_name(event_name)?;
            let callback = registry.get(handler_name).ok_or_else(|| {
                QueueError::Config(format!(
                    "Event '{}' refers to unknown handler '{}'",
                    event_name, handler_name
                ))
            })?;
            defaults
                .listeners
                .insert(event_name.clone(), Listener::new(event_name.as_str(), Rc::clone(callback)));
        }
        log::debug!(
            "Resolved {} default listener(s) for '{}'",
            defaults.listeners.len(),
            config.name
        );
        Ok(defaults)
    }

    pub fn contains(&self, event_name: &str) -> bool {
        self.listeners.contains_key(event_name)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn into_listeners(self) -> HashMap<String, Listener<T, D>> {
        self.listeners
    }
}

impl<T, D> Default for Defaults<T, D> {
    fn default() -> Self {
        Self::new()
    }
}
