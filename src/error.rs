//! Error types for Bayline
//!
//! Uses `thiserror` for library errors; the CLI edge wraps these in `anyhow`.

use thiserror::Error;

/// Result type alias for Bayline operations
pub type BaylineResult<T> = Result<T, BaylineError>;

/// Main error type for Bayline operations
#[derive(Error, Debug)]
pub enum BaylineError {
    /// Referenced bay does not exist in the project
    #[error("bay '{bay_id}' not found")]
    BayNotFound { bay_id: String },

    /// Referenced device does not exist in its bay
    #[error("device '{device_id}' not found in bay '{bay_id}'")]
    DeviceNotFound { bay_id: String, device_id: String },

    /// Referenced signal is not tracked by the bay
    #[error("signal '{signal_id}' not found in bay '{bay_id}'")]
    SignalNotFound { bay_id: String, signal_id: String },

    /// Signal referenced by nothing anywhere in the project
    #[error("signal '{signal_id}' not found in project")]
    SignalNotFoundInProject { signal_id: String },

    /// Device id already taken within the bay
    #[error("device id '{device_id}' already exists in bay '{bay_id}'")]
    DuplicateDeviceId { bay_id: String, device_id: String },

    /// A device or bay name came back empty after trimming
    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },

    /// Interlock item without a relay tag (1-based position within the spec)
    #[error("invalid interlock at position {position}: relay_tag is required (e.g. 86T2)")]
    InvalidInterlock { position: usize },

    /// Operation declined at the confirmation gate
    #[error("operation aborted by user")]
    Aborted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document error
    #[error("project document error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config error
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
