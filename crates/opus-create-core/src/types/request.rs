//! The project request assembled by the interactive collector

use crate::error::{Error, Result};

/// Everything the pipeline needs to know about the project being created.
///
/// Built once, before any side effect, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    project_name: String,
    project_description: String,
    libraries: Vec<String>,
}

impl ProjectRequest {
    /// Create a request, validating the project name.
    ///
    /// The name is stored trimmed. Libraries keep their selection order and are
    /// not deduplicated.
    pub fn new(
        project_name: impl Into<String>,
        project_description: impl Into<String>,
        libraries: Vec<String>,
    ) -> Result<Self> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;

        Ok(Self {
            project_name: project_name.trim().to_string(),
            project_description: project_description.into(),
            libraries,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn has_libraries(&self) -> bool {
        !self.libraries.is_empty()
    }
}

/// Reject names that are empty once surrounding whitespace is removed
pub fn validate_project_name(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}
