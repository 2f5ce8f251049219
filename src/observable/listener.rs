//! Listener — a shared handle to a change callback.

use std::fmt;
use std::sync::Arc;

use super::event::ChangeEvent;
use super::value::PropertyValue;

/// Closure type for change listeners.
pub type ListenerFn<V> = dyn Fn(&ChangeEvent<V>) + Send + Sync;

/// A registered (or registrable) change callback.
///
/// Cloning is a ref-count bump and the clone is the *same* listener: equality
/// is handle identity, so removing a clone removes the original registration.
/// Two handles built from separate closures are never equal, even if the
/// closures do the same thing.
pub struct Listener<V = PropertyValue>(Arc<ListenerFn<V>>);

impl<V: 'static> Listener<V> {
    pub fn new(callback: impl Fn(&ChangeEvent<V>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }
}

impl<V> Listener<V> {
    /// Invoke the callback. Panics in the callback propagate to the caller.
    pub fn notify(&self, event: &ChangeEvent<V>) {
        (self.0)(event)
    }

    /// Whether both handles point at the same callback.
    pub fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl<V> Clone for Listener<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> PartialEq for Listener<V> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<V> Eq for Listener<V> {}

impl<V> fmt::Debug for Listener<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
