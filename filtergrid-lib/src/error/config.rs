//! Configuration error types

/// Errors that can occur while loading a decorator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("Invalid decorator config: {0}")]
    Json(#[from] serde_json::Error),
}
