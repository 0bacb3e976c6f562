//! eventq: a synchronous event queue that gives any object `on`/`off`/`trigger`.
//!
//! Each event name may have one default listener, fixed when the queue is
//! built, plus any number of dynamic listeners registered with `on`. On
//! `trigger` the dynamic listeners run newest-first, then the default runs
//! unless a listener called [`Event::prevent_default`] or [`Event::halt`].
//! `halt` also skips the remaining dynamic listeners.

pub mod config;
pub mod event;
pub mod utils;

pub use config::{ConfigManager, DefaultsConfig};
pub use event::{Defaults, Emitter, EmitterDefaults, Event, HandlerRegistry, Listener, Queue};
pub use utils::error::{QueueError, Result};
