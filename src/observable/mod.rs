//! Observable layer — bound-property change notification for domain objects.
//!
//! # Overview
//!
//! An entity embeds a [`ChangeSupport`] and implements [`Observable`] to get
//! per-property and global listener registration plus typed emitters. Events
//! are delivered synchronously on the emitting thread.
//!
//! # Modules
//!
//! - [`event`] — [`ChangeEvent`].
//! - [`listener`] — [`Listener`] handles with identity semantics.
//! - [`support`] — [`ChangeSupport`], [`Observable`], [`Registration`].
//! - [`value`] — [`PropertyValue`] and [`values_equal`].

pub mod event;
pub mod listener;
pub mod support;
pub mod value;

pub use event::ChangeEvent;
pub use listener::{Listener, ListenerFn};
pub use support::{ChangeSupport, Observable, Registration};
pub use value::{values_equal, PropertyValue};
