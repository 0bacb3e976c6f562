//! A queue bound to itself.

use crate::event::defaults::Defaults;
use crate::event::queue::Queue;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Default listeners for an [`Emitter`].
pub type EmitterDefaults<D = ()> = Defaults<Emitter<D>, D>;

/// Standalone event source whose bound target is the emitter itself.
///
/// Dereferences to its [`Queue`], so `on`/`off`/`trigger` are called on it
/// directly, and listeners receive the emitter as their first argument.
pub struct Emitter<D = ()> {
    queue: Queue<Emitter<D>, D>,
}

impl<D> Emitter<D> {
    pub fn new(defaults: EmitterDefaults<D>) -> Rc<Self> {
        Rc::new_cyclic(|me| Emitter {
            queue: Queue::new(defaults, me.clone()),
        })
    }
}

impl<D> Deref for Emitter<D> {
    type Target = Queue<Emitter<D>, D>;

    fn deref(&self) -> &Self::Target {
        &self.queue
    }
}

impl<D> fmt::Debug for Emitter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").field("queue", &self.queue).finish()
    }
}
