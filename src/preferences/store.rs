//! PreferenceStore — an observable holder of [`EditorPreferences`].
//!
//! Preference pages and editors register listeners on the store and refresh
//! when a preference they depend on changes. A change event carries the
//! preference key as its property name; replacing the whole set at once
//! emits a single bulk change instead.
//!
//! Values live behind a `parking_lot::RwLock` that is released before any
//! event is emitted, so listeners may read the store (or set other
//! preferences) from inside a callback.

use parking_lot::RwLock;

use crate::error::PreferencesError;
use crate::observable::{values_equal, ChangeSupport, Observable, PropertyValue};

use super::model::EditorPreferences;

pub struct PreferenceStore {
    values: RwLock<EditorPreferences>,
    changes: ChangeSupport,
}

impl PreferenceStore {
    pub fn new(preferences: EditorPreferences) -> Self {
        Self {
            values: RwLock::new(preferences),
            changes: ChangeSupport::new(),
        }
    }

    /// Snapshot of the current preferences.
    pub fn preferences(&self) -> EditorPreferences {
        self.values.read().clone()
    }

    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.values.read().get(key)
    }

    /// Set one preference.
    ///
    /// Returns `Ok(true)` and emits `(key, old, new)` if the stored value
    /// changed, `Ok(false)` without emitting if it was already equal.
    pub fn set(&self, key: &str, value: impl Into<PropertyValue>) -> Result<bool, PreferencesError> {
        let (old, new) = {
            let mut values = self.values.write();
            let old = values
                .get(key)
                .ok_or_else(|| PreferencesError::UnknownKey(key.to_owned()))?;
            values.set(key, value.into())?;
            let new = values
                .get(key)
                .ok_or_else(|| PreferencesError::UnknownKey(key.to_owned()))?;
            (old, new)
        };
        if values_equal(Some(&old), Some(&new)) {
            return Ok(false);
        }
        self.emit_change(key, old, new);
        Ok(true)
    }

    /// Replace every preference at once.
    ///
    /// Emits one bulk change if anything differed.
    pub fn replace_all(&self, preferences: EditorPreferences) -> Result<bool, PreferencesError> {
        preferences.validate()?;
        Ok(self.store_all(preferences))
    }

    /// Restore the defaults; same notification rules as [`replace_all`].
    ///
    /// [`replace_all`]: Self::replace_all
    pub fn reset_to_defaults(&self) -> bool {
        self.store_all(EditorPreferences::default())
    }

    /// Swap in an already validated set and emit a bulk change if it differs.
    fn store_all(&self, preferences: EditorPreferences) -> bool {
        let changed = {
            let mut values = self.values.write();
            let changed = *values != preferences;
            *values = preferences;
            changed
        };
        if changed {
            tracing::debug!("editor preferences replaced");
            self.emit_bulk_change();
        }
        changed
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(EditorPreferences::default())
    }
}

impl Observable for PreferenceStore {
    type Value = PropertyValue;

    fn change_support(&self) -> &ChangeSupport {
        &self.changes
    }
}
