//! Error types for the bridge

use thiserror::Error;

/// Failures the bridge can surface
///
/// Missing parameters at attach time are a fatal configuration error: the
/// bridge cannot function without them and there is no recovery. Malformed
/// text input is not an error at all; it is silently ignored at the edit
/// site.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A required parameter key was absent from the store
    #[error("required parameter '{name}' not found in parameter store")]
    ParameterNotFound {
        /// The key that failed to resolve
        name: &'static str,
    },

    /// The UI context has shut down
    #[error("ui context is no longer running")]
    UiClosed,

    /// Invalid bridge configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
