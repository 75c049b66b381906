//! Dependency installation through the project's package manager

use crate::error::{Error, Result};
use crate::process::run_inherited;
use async_trait::async_trait;
use camino::Utf8Path;
use opus_create_core::PackageManager;
use tracing::info;

/// Installs packages into a project directory
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    /// Installer name for log messages
    fn name(&self) -> &str;

    /// Install all `packages` into `project_dir` with a single invocation
    async fn install(&self, project_dir: &Utf8Path, packages: &[String]) -> Result<()>;
}

/// Runs `<manager> <install|add> <packages...>` inside the project directory
#[derive(Debug, Clone, Copy)]
pub struct CommandInstaller {
    manager: PackageManager,
}

impl CommandInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self { manager }
    }

    fn args(&self, packages: &[String]) -> Vec<String> {
        std::iter::once(self.manager.install_verb().to_string())
            .chain(packages.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl PackageInstaller for CommandInstaller {
    fn name(&self) -> &str {
        self.manager.program()
    }

    async fn install(&self, project_dir: &Utf8Path, packages: &[String]) -> Result<()> {
        info!(
            "Installing with {} in {}: {}",
            self.manager,
            project_dir,
            packages.join(", ")
        );

        run_inherited(self.manager.program(), &self.args(packages), Some(project_dir))
            .await
            .map_err(|e| Error::dependency_install(e.to_string()))?;

        info!("Libraries installed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_invocation_args() {
        let installer = CommandInstaller::new(PackageManager::Npm);
        let packages = vec![
            "@intenda/opus-ui-components".to_string(),
            "@intenda/opus-ui-grid".to_string(),
        ];
        assert_eq!(
            installer.args(&packages),
            vec![
                "install",
                "@intenda/opus-ui-components",
                "@intenda/opus-ui-grid"
            ]
        );
    }

    #[test]
    fn test_add_verb_for_other_managers() {
        let installer = CommandInstaller::new(PackageManager::Pnpm);
        let args = installer.args(&["@intenda/opus-ui-svg".to_string()]);
        assert_eq!(args, vec!["add", "@intenda/opus-ui-svg"]);
        assert_eq!(installer.name(), "pnpm");
    }
}
