//! Template materialization
//!
//! A template is a remote repository whose file tree becomes the new project.
//! References use the `<url>[#<branch>]` form understood by degit:
//!
//! ```text
//! https://github.com/IntendaUK/opus-ui-example#main
//! ```
//!
//! Two sources are provided:
//! - [`DegitSource`]: `npx degit`, copies the tree without git history
//! - [`GitSource`]: shallow `git clone`, history removed afterwards
//!
//! Both implement [`TemplateSource`], which the pipeline depends on so tests
//! can substitute a local fake.

mod degit;
mod git;

pub use degit::DegitSource;
pub use git::GitSource;

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use opus_create_core::CloneMethod;
use std::fmt;

/// A template repository plus an optional branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    url: String,
    branch: Option<String>,
}

impl TemplateReference {
    /// Parse a `<url>[#<branch>]` reference
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();

        let (url, branch) = match reference.split_once('#') {
            Some((url, branch)) => (url, Some(branch)),
            None => (reference, None),
        };

        if url.is_empty() || url.chars().any(char::is_whitespace) {
            return Err(Error::invalid_template_reference(reference));
        }

        let branch = match branch {
            Some(b) if b.is_empty() || b.starts_with('-') || b.contains("..") => {
                return Err(Error::invalid_template_reference(reference));
            }
            Some(b) => Some(b.to_string()),
            None => None,
        };

        Ok(Self {
            url: url.to_string(),
            branch,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}

impl fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{}#{}", self.url, branch),
            None => f.write_str(&self.url),
        }
    }
}

/// Fetches a template into a fresh directory
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Source name for log messages
    fn name(&self) -> &'static str;

    /// Materialize `reference` into `destination`.
    ///
    /// `destination` must not exist yet. On failure nothing is cleaned up.
    async fn materialize(&self, reference: &TemplateReference, destination: &Utf8Path)
        -> Result<()>;
}

/// Build the template source for a configured clone method
pub fn source_for(method: CloneMethod) -> Box<dyn TemplateSource> {
    match method {
        CloneMethod::Degit => Box::new(DegitSource),
        CloneMethod::Git => Box::new(GitSource),
    }
}
