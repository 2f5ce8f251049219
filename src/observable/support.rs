//! ChangeSupport<V> — the listener registry and emitter an observable entity
//! owns, and the [`Observable`] trait that exposes it.
//!
//! The registry is allocated lazily on the first registration, so entities
//! nobody observes never pay for it and every emit on them is a single lock
//! check.
//!
//! All methods take `&self`. The registry sits behind a `parking_lot::Mutex`
//! that is held only while the registry is read or mutated, never while a
//! listener runs: emission copies the relevant handles out first. Listeners
//! may therefore add or remove listeners (themselves included) during a
//! notification; such changes take effect from the next emit.
//!
//! Panics inside a listener are not caught. They unwind to whoever emitted.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use super::event::ChangeEvent;
use super::listener::Listener;
use super::value::PropertyValue;

// ============================================================================
// Registry
// ============================================================================

struct Registry<V> {
    /// Listeners for every property, in registration order.
    all: Vec<Listener<V>>,
    /// Listeners for one named property, in registration order per name.
    by_property: BTreeMap<String, Vec<Listener<V>>>,
}

impl<V> Registry<V> {
    fn new() -> Self {
        Self {
            all: Vec::new(),
            by_property: BTreeMap::new(),
        }
    }

    /// Handles to notify for an event on `property_name`: the "all
    /// properties" listeners first, then the ones scoped to the name.
    fn snapshot_for(&self, property_name: Option<&str>) -> Vec<Listener<V>> {
        let scoped = property_name.and_then(|name| self.by_property.get(name));
        let mut out = Vec::with_capacity(self.all.len() + scoped.map_or(0, Vec::len));
        out.extend(self.all.iter().cloned());
        if let Some(scoped) = scoped {
            out.extend(scoped.iter().cloned());
        }
        out
    }
}

/// Removes the earliest registration of `listener` from `list`.
fn remove_first<V>(list: &mut Vec<Listener<V>>, listener: &Listener<V>) {
    if let Some(pos) = list.iter().position(|l| l.same(listener)) {
        list.remove(pos);
    }
}

// ============================================================================
// Registration
// ============================================================================

/// One entry of [`ChangeSupport::registrations`].
#[derive(Debug, Clone, PartialEq)]
pub struct Registration<V = PropertyValue> {
    /// `None` for listeners registered for all properties.
    pub property_name: Option<String>,
    pub listener: Listener<V>,
}

// ============================================================================
// ChangeSupport
// ============================================================================

/// Bound-property support for one entity.
pub struct ChangeSupport<V = PropertyValue> {
    registry: Mutex<Option<Registry<V>>>,
}

impl<V> ChangeSupport<V> {
    /// Create support with no registry allocated.
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(None),
        }
    }

    /// Whether the registry has been allocated (some listener was ever added).
    pub fn is_observed(&self) -> bool {
        self.registry.lock().is_some()
    }

    /// Register `listener` for every property. `None` does nothing.
    pub fn add_listener<'a>(&self, listener: impl Into<Option<&'a Listener<V>>>)
    where
        V: 'a,
    {
        let Some(listener) = listener.into() else {
            return;
        };
        let mut guard = self.registry.lock();
        Self::registry_mut(&mut guard).all.push(listener.clone());
    }

    /// Register `listener` for `property_name` only. `None` does nothing.
    pub fn add_property_listener<'a>(
        &self,
        property_name: &str,
        listener: impl Into<Option<&'a Listener<V>>>,
    ) where
        V: 'a,
    {
        let Some(listener) = listener.into() else {
            return;
        };
        let mut guard = self.registry.lock();
        Self::registry_mut(&mut guard)
            .by_property
            .entry(property_name.to_owned())
            .or_default()
            .push(listener.clone());
    }

    /// Remove one registration of `listener` made with [`add_listener`].
    ///
    /// Does nothing for `None`, for unknown listeners, or before any listener
    /// was added.
    ///
    /// [`add_listener`]: Self::add_listener
    pub fn remove_listener<'a>(&self, listener: impl Into<Option<&'a Listener<V>>>)
    where
        V: 'a,
    {
        let Some(listener) = listener.into() else {
            return;
        };
        if let Some(registry) = self.registry.lock().as_mut() {
            remove_first(&mut registry.all, listener);
        }
    }

    /// Remove one registration of `listener` for `property_name`.
    pub fn remove_property_listener<'a>(
        &self,
        property_name: &str,
        listener: impl Into<Option<&'a Listener<V>>>,
    ) where
        V: 'a,
    {
        let Some(listener) = listener.into() else {
            return;
        };
        let mut guard = self.registry.lock();
        let Some(registry) = guard.as_mut() else {
            return;
        };
        if let Some(list) = registry.by_property.get_mut(property_name) {
            remove_first(list, listener);
            if list.is_empty() {
                registry.by_property.remove(property_name);
            }
        }
    }

    /// Snapshot of the listeners registered for all properties.
    pub fn listeners(&self) -> Vec<Listener<V>> {
        self.registry
            .lock()
            .as_ref()
            .map(|r| r.all.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the listeners registered for `property_name` only.
    pub fn property_listeners(&self, property_name: &str) -> Vec<Listener<V>> {
        self.registry
            .lock()
            .as_ref()
            .and_then(|r| r.by_property.get(property_name).cloned())
            .unwrap_or_default()
    }

    /// Every registration with its scope: global ones first, then scoped ones
    /// grouped by property name in name order.
    pub fn registrations(&self) -> Vec<Registration<V>> {
        let guard = self.registry.lock();
        let Some(registry) = guard.as_ref() else {
            return Vec::new();
        };
        let global = registry.all.iter().map(|l| Registration {
            property_name: None,
            listener: l.clone(),
        });
        let scoped = registry.by_property.iter().flat_map(|(name, list)| {
            list.iter().map(move |l| Registration {
                property_name: Some(name.clone()),
                listener: l.clone(),
            })
        });
        global.chain(scoped).collect()
    }

    /// Total number of registrations across all scopes.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().as_ref().map_or(0, |r| {
            r.all.len() + r.by_property.values().map(Vec::len).sum::<usize>()
        })
    }

    /// Deliver a pre-built event.
    ///
    /// Listeners for all properties run first, then listeners for the event's
    /// property, each in registration order. A bulk event only reaches the
    /// former.
    pub fn emit_event(&self, event: &ChangeEvent<V>) {
        if let Some(snapshot) = self.snapshot(event.property_name()) {
            Self::notify(&snapshot, event);
        }
    }

    /// Report that `property_name` changed from `old_value` to `new_value`.
    ///
    /// Fires even when the two values are equal; use
    /// [`values_equal`](super::values_equal) to guard if that matters.
    pub fn emit_change<T: Into<V>>(&self, property_name: &str, old_value: T, new_value: T) {
        self.emit_optional_change(property_name, Some(old_value), Some(new_value));
    }

    /// Like [`emit_change`](Self::emit_change) for values that may be absent.
    pub fn emit_optional_change<T: Into<V>>(
        &self,
        property_name: &str,
        old_value: Option<T>,
        new_value: Option<T>,
    ) {
        // The event is only built once there is someone to deliver it to.
        let Some(snapshot) = self.snapshot(Some(property_name)) else {
            return;
        };
        let event = ChangeEvent::new(
            Some(property_name.to_owned()),
            old_value.map(Into::into),
            new_value.map(Into::into),
        );
        Self::notify(&snapshot, &event);
    }

    /// Report that an unspecified set of properties changed.
    pub fn emit_bulk_change(&self) {
        self.emit_event(&ChangeEvent::bulk());
    }

    /// Listeners to notify for `property_name`, or `None` if no registry
    /// exists. Takes the lock exactly once.
    fn snapshot(&self, property_name: Option<&str>) -> Option<Vec<Listener<V>>> {
        self.registry
            .lock()
            .as_ref()
            .map(|registry| registry.snapshot_for(property_name))
    }

    fn notify(snapshot: &[Listener<V>], event: &ChangeEvent<V>) {
        tracing::trace!(
            property = event.property_name().unwrap_or("*"),
            listeners = snapshot.len(),
            "emitting property change"
        );
        for listener in snapshot {
            listener.notify(event);
        }
    }

    fn registry_mut(slot: &mut Option<Registry<V>>) -> &mut Registry<V> {
        slot.get_or_insert_with(|| {
            tracing::trace!("allocating listener registry");
            Registry::new()
        })
    }
}

impl<V> Default for ChangeSupport<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Observable
// ============================================================================

/// An entity with bound properties.
///
/// Implementors embed a [`ChangeSupport`] and return it from
/// [`change_support`](Observable::change_support); every registration and
/// emission method comes for free. Setters call the `emit_*` methods after
/// mutating state.
pub trait Observable {
    type Value: 'static;

    fn change_support(&self) -> &ChangeSupport<Self::Value>;

    fn add_listener<'a>(&self, listener: impl Into<Option<&'a Listener<Self::Value>>>) {
        self.change_support().add_listener(listener)
    }

    fn add_property_listener<'a>(
        &self,
        property_name: &str,
        listener: impl Into<Option<&'a Listener<Self::Value>>>,
    ) {
        self.change_support()
            .add_property_listener(property_name, listener)
    }

    fn remove_listener<'a>(&self, listener: impl Into<Option<&'a Listener<Self::Value>>>) {
        self.change_support().remove_listener(listener)
    }

    fn remove_property_listener<'a>(
        &self,
        property_name: &str,
        listener: impl Into<Option<&'a Listener<Self::Value>>>,
    ) {
        self.change_support()
            .remove_property_listener(property_name, listener)
    }

    fn listeners(&self) -> Vec<Listener<Self::Value>> {
        self.change_support().listeners()
    }

    fn property_listeners(&self, property_name: &str) -> Vec<Listener<Self::Value>> {
        self.change_support().property_listeners(property_name)
    }

    /// Create a listener from `callback`, register it for all properties and
    /// return the handle for later removal.
    fn on(
        &self,
        callback: impl Fn(&ChangeEvent<Self::Value>) + Send + Sync + 'static,
    ) -> Listener<Self::Value> {
        let listener = Listener::new(callback);
        self.add_listener(&listener);
        listener
    }

    /// Like [`on`](Observable::on), scoped to `property_name`.
    fn on_property(
        &self,
        property_name: &str,
        callback: impl Fn(&ChangeEvent<Self::Value>) + Send + Sync + 'static,
    ) -> Listener<Self::Value> {
        let listener = Listener::new(callback);
        self.add_property_listener(property_name, &listener);
        listener
    }

    fn emit_event(&self, event: &ChangeEvent<Self::Value>) {
        self.change_support().emit_event(event)
    }

    fn emit_change<T: Into<Self::Value>>(&self, property_name: &str, old_value: T, new_value: T) {
        self.change_support()
            .emit_change(property_name, old_value, new_value)
    }

    fn emit_optional_change<T: Into<Self::Value>>(
        &self,
        property_name: &str,
        old_value: Option<T>,
        new_value: Option<T>,
    ) {
        self.change_support()
            .emit_optional_change(property_name, old_value, new_value)
    }

    fn emit_bulk_change(&self) {
        self.change_support().emit_bulk_change()
    }
}
