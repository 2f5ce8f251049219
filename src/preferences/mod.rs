//! Editor preferences — keys, defaults, JSON documents, and an observable
//! store that reports changes per key.

pub mod keys;
pub mod model;
pub mod store;

pub use model::{EditorPreferences, NewLineStyle};
pub use store::PreferenceStore;
