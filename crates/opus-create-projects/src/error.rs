//! Error types for opus-create-projects

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Result type alias using opus-create-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template could not be materialized
    #[error("Failed to create Opus UI project: {message}")]
    TemplateClone { message: String },

    /// Invalid template reference
    #[error("Invalid template reference: {reference}")]
    InvalidTemplateReference { reference: String },

    /// Package manager invocation failed
    #[error("Failed to install libraries: {message}")]
    DependencyInstall { message: String },

    /// A generated file could not be read, parsed or written
    #[error("Failed to patch {path}: {cause}")]
    FilePatch { path: Utf8PathBuf, cause: String },

    /// Core library error
    #[error(transparent)]
    Core(#[from] opus_create_core::Error),
}

impl Error {
    /// Create a template clone error
    pub fn template_clone(message: impl Into<String>) -> Self {
        Self::TemplateClone {
            message: message.into(),
        }
    }

    /// Create an invalid template reference error
    pub fn invalid_template_reference(reference: impl Into<String>) -> Self {
        Self::InvalidTemplateReference {
            reference: reference.into(),
        }
    }

    /// Create a dependency install error
    pub fn dependency_install(message: impl Into<String>) -> Self {
        Self::DependencyInstall {
            message: message.into(),
        }
    }

    /// Create a file patch error
    pub fn file_patch(path: impl AsRef<Utf8Path>, cause: impl ToString) -> Self {
        Self::FilePatch {
            path: path.as_ref().to_path_buf(),
            cause: cause.to_string(),
        }
    }
}
