pub mod error;

pub mod bundle;
pub mod observable;
pub mod preferences;
