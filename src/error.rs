use thiserror::Error;

// ---------------------------------------------------------------------------
// PreferencesError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown preference \"{0}\"")]
    UnknownKey(String),

    #[error("Preference \"{key}\" expects a {expected} value, received {received}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        received: &'static str,
    },

    #[error("Preference \"{key}\" is out of range: {value}")]
    OutOfRange { key: String, value: String },

    #[error("Preference \"groupLevelSeparator\" must not be empty")]
    EmptySeparator,
}

// ---------------------------------------------------------------------------
// BundleError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Invalid resource bundle key: \"{0}\"")]
    InvalidKey(String),
}
