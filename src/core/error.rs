//! Error types for the log manager

pub type Result<T> = std::result::Result<T, LogManagerError>;

#[derive(Debug, thiserror::Error)]
pub enum LogManagerError {
    /// Level name did not match any canonical name
    #[error("Unknown log level '{name}'")]
    UnknownLevel { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogManagerError {
    /// Create an unknown level error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LogManagerError::UnknownLevel { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogManagerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LogManagerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}
