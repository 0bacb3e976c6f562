//! Event dispatch for eventq.
//!
//! This module provides the synchronous `on`/`off`/`trigger` engine: the
//! [`Event`] value handed to listeners, the listener records, the fixed set
//! of default listeners and the [`Queue`] that ties them to a bound target.

pub mod defaults;
pub mod emitter;
pub mod event;
pub mod listener;
pub mod queue;

pub use defaults::Defaults;
pub use emitter::{Emitter, EmitterDefaults};
pub use event::Event;
pub use listener::HandlerRegistry;
pub use listener::Listener;
pub use listener::ListenerCallback;
pub use queue::Queue;
