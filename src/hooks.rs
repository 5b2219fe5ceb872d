//! Validation hooks.
//!
//! A [`Collection`] notifies an optional [`Dispatcher`] before and after its
//! fields are validated. A listener can veto validation by returning
//! [`HookOutcome::Abort`], or record errors of its own through the collection
//! carried on the [`HookEvent`].
//!
//! [`HookRegistry`] is the stock dispatcher: listeners are registered by event
//! name and run in registration order.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::collection::Collection;

/// Event fired before any field is validated.
pub const BEFORE_VALIDATE: &str = "before_validate";

/// Event fired after every field has been validated.
pub const AFTER_VALIDATE: &str = "after_validate";

/// Result of dispatching a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub enum HookOutcome {
    /// Carry on.
    #[default]
    Continue,
    /// Stop and fail validation.
    Abort,
}

impl HookOutcome {
    /// Returns true for [`HookOutcome::Abort`].
    pub fn is_abort(self) -> bool {
        self == HookOutcome::Abort
    }
}

/// A listener that returns nothing means "continue".
impl From<()> for HookOutcome {
    fn from(_: ()) -> Self {
        HookOutcome::Continue
    }
}

/// A notification carrying the collection being validated.
pub struct HookEvent<'a> {
    name: &'a str,
    collection: &'a mut Collection,
}

impl<'a> HookEvent<'a> {
    /// Creates an event named `name` for `collection`.
    pub fn new(name: &'a str, collection: &'a mut Collection) -> Self {
        Self { name, collection }
    }

    /// Returns the event name, e.g. [`BEFORE_VALIDATE`].
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the collection being validated.
    pub fn collection(&self) -> &Collection {
        &*self.collection
    }

    /// Returns the collection being validated, e.g. to record errors.
    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut *self.collection
    }
}

/// Receives hook notifications from a collection.
pub trait Dispatcher: Send + Sync {
    /// Handles `event`, returning [`HookOutcome::Abort`] to veto.
    fn fire(&self, event: &mut HookEvent<'_>) -> HookOutcome;
}

type Listener = Arc<dyn Fn(&mut HookEvent<'_>) -> HookOutcome + Send + Sync>;

/// Type alias for the listener storage map.
type ListenerMap = Arc<RwLock<IndexMap<String, Vec<Listener>>>>;

/// A thread-safe registry of named hook listeners.
///
/// Clones share the same listener table, so one registry can be configured
/// once and attached to many collections.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use fieldset::hooks::{HookOutcome, HookRegistry, BEFORE_VALIDATE};
/// use fieldset::Collection;
///
/// let hooks = HookRegistry::new();
/// hooks.on(BEFORE_VALIDATE, |event| {
///     if event.collection().data().has("session") {
///         HookOutcome::Continue
///     } else {
///         HookOutcome::Abort
///     }
/// });
///
/// let mut collection = Collection::new().with_dispatcher(Arc::new(hooks));
/// assert!(!collection.validate());
/// ```
#[derive(Clone, Default)]
pub struct HookRegistry {
    listeners: ListenerMap,
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `event`.
    ///
    /// The listener may return a [`HookOutcome`] or `()`.
    pub fn on<F, R>(&self, event: impl Into<String>, listener: F)
    where
        F: Fn(&mut HookEvent<'_>) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        let event = event.into();
        tracing::trace!(event = %event, "registering hook listener");

        let listener: Listener = Arc::new(move |e: &mut HookEvent<'_>| listener(e).into());
        self.listeners.write().entry(event).or_default().push(listener);
    }

    /// Returns the number of listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }
}

impl Dispatcher for HookRegistry {
    fn fire(&self, event: &mut HookEvent<'_>) -> HookOutcome {
        // Snapshot so listeners may register further listeners without deadlocking
        let listeners: Vec<Listener> = match self.listeners.read().get(event.name()) {
            Some(listeners) => listeners.clone(),
            None => return HookOutcome::Continue,
        };

        for (position, listener) in listeners.iter().enumerate() {
            if listener(event).is_abort() {
                tracing::trace!(event = event.name(), position, "hook listener aborted");
                return HookOutcome::Abort;
            }
        }
        HookOutcome::Continue
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.read();
        let mut map = f.debug_map();
        for (event, list) in listeners.iter() {
            map.entry(event, &list.len());
        }
        map.finish()
    }
}
