//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pitlane service
#[derive(Error, Debug)]
pub enum Error {
    /// Entity or referenced resource not found
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided by the caller
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Document store operation error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },
}

impl Error {
    /// Create a not-found error for the given resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a database error without a source
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error is a not-found outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
