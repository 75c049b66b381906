//! Error types for opus-create-core

use thiserror::Error;

/// Result type alias using opus-create-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project name was empty after trimming
    #[error("Project name cannot be empty")]
    EmptyInput,

    /// Library is not part of the catalog
    #[error("Unknown library: {library}. Available libraries: {available}")]
    UnknownLibrary { library: String, available: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown library error
    pub fn unknown_library(library: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownLibrary {
            library: library.into(),
            available: available.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
