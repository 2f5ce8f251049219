//! ChangeEvent — an immutable record of one bound-property change.

use super::value::PropertyValue;

/// A property change delivered to listeners.
///
/// A missing `property_name` with no old/new values is a bulk change: some
/// unspecified set of properties changed and observers should re-derive
/// everything.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<V = PropertyValue> {
    property_name: Option<String>,
    old_value: Option<V>,
    new_value: Option<V>,
}

impl<V> ChangeEvent<V> {
    pub fn new(property_name: Option<String>, old_value: Option<V>, new_value: Option<V>) -> Self {
        Self {
            property_name,
            old_value,
            new_value,
        }
    }

    /// Event for a named property with both values present.
    pub fn property(name: impl Into<String>, old_value: V, new_value: V) -> Self {
        Self::new(Some(name.into()), Some(old_value), Some(new_value))
    }

    /// The bulk change signal.
    pub fn bulk() -> Self {
        Self::new(None, None, None)
    }

    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    pub fn old_value(&self) -> Option<&V> {
        self.old_value.as_ref()
    }

    pub fn new_value(&self) -> Option<&V> {
        self.new_value.as_ref()
    }

    pub fn is_bulk(&self) -> bool {
        self.property_name.is_none() && self.old_value.is_none() && self.new_value.is_none()
    }

    /// The property went from absent to present.
    pub fn changed_from_none(&self) -> bool {
        self.old_value.is_none() && self.new_value.is_some()
    }

    /// The property went from present to absent.
    pub fn changed_to_none(&self) -> bool {
        self.old_value.is_some() && self.new_value.is_none()
    }
}
