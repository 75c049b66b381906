//! Template materialization through a shallow `git clone`

use super::{TemplateReference, TemplateSource};
use crate::error::{Error, Result};
use crate::process::run_inherited;
use async_trait::async_trait;
use camino::Utf8Path;
use tracing::{debug, info};

/// Clones the template with `git clone --depth 1`, then drops `.git` so the
/// new project does not inherit the template's history or remote
#[derive(Debug, Clone, Copy, Default)]
pub struct GitSource;

impl GitSource {
    fn args(reference: &TemplateReference, destination: &Utf8Path) -> Vec<String> {
        let mut args = vec!["clone".to_string(), "--depth".to_string(), "1".to_string()];

        if let Some(branch) = reference.branch() {
            args.push("--branch".to_string());
            args.push(branch.to_string());
        }

        args.push(reference.url().to_string());
        args.push(destination.to_string());
        args
    }
}

#[async_trait]
impl TemplateSource for GitSource {
    fn name(&self) -> &'static str {
        "git"
    }

    async fn materialize(
        &self,
        reference: &TemplateReference,
        destination: &Utf8Path,
    ) -> Result<()> {
        info!("Cloning template {} -> {}", reference, destination);

        run_inherited("git", &Self::args(reference, destination), None)
            .await
            .map_err(|e| Error::template_clone(e.to_string()))?;

        let git_dir = destination.join(".git");
        if git_dir.exists() {
            debug!("Removing template history at {}", git_dir);
            tokio::fs::remove_dir_all(&git_dir).await.map_err(|e| {
                Error::template_clone(format!("could not remove {}: {}", git_dir, e))
            })?;
        }

        info!("Template cloned successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_args_with_branch() {
        let reference =
            TemplateReference::parse("https://github.com/IntendaUK/opus-ui-example#main").unwrap();
        let args = GitSource::args(&reference, Utf8Path::new("my-app"));
        assert_eq!(
            args,
            vec![
                "clone",
                "--depth",
                "1",
                "--branch",
                "main",
                "https://github.com/IntendaUK/opus-ui-example",
                "my-app"
            ]
        );
    }

    #[test]
    fn test_git_args_without_branch() {
        let reference = TemplateReference::parse("https://example.com/acme/template.git").unwrap();
        let args = GitSource::args(&reference, Utf8Path::new("app"));
        assert_eq!(
            args,
            vec![
                "clone",
                "--depth",
                "1",
                "https://example.com/acme/template.git",
                "app"
            ]
        );
    }
}
