//! End-to-end scaffolding: materialize, install, patch
//!
//! Stages run strictly in order and the first failure stops the run. Nothing
//! is rolled back; whatever earlier stages produced stays on disk.

use crate::error::{Error, Result};
use crate::install::{CommandInstaller, PackageInstaller};
use crate::patch::{write_project_files, ProjectLayout};
use crate::template::{source_for, TemplateReference, TemplateSource};
use camino::{Utf8Path, Utf8PathBuf};
use opus_create_core::{ProjectRequest, ScaffoldConfig};
use tracing::{debug, info};

/// Callbacks fired as the pipeline moves between stages.
///
/// All methods default to doing nothing.
pub trait ScaffoldObserver: Send + Sync {
    /// Called before the template is fetched
    fn on_materialize_start(&self, project_name: &str, reference: &TemplateReference) {
        let _ = (project_name, reference);
    }

    /// Called before the package manager runs; not called for an empty selection
    fn on_install_start(&self, libraries: &[String]) {
        let _ = libraries;
    }

    /// Called before the file mutations are applied
    fn on_patch_start(&self, project_root: &Utf8Path) {
        let _ = project_root;
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ScaffoldObserver for NoOpObserver {}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Directory the template was materialized into
    pub project_root: Utf8PathBuf,
    /// Libraries handed to the installer, empty when it was skipped
    pub installed: Vec<String>,
    /// Files rewritten by the patch stage, in order
    pub patched_files: Vec<Utf8PathBuf>,
}

/// Runs the scaffolding pipeline against pluggable collaborators
pub struct Scaffolder {
    reference: TemplateReference,
    source: Box<dyn TemplateSource>,
    installer: Box<dyn PackageInstaller>,
}

impl Scaffolder {
    pub fn new(
        reference: TemplateReference,
        source: Box<dyn TemplateSource>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            reference,
            source,
            installer,
        }
    }

    /// Build a scaffolder using the configured template, clone method and package manager
    pub fn from_config(config: &ScaffoldConfig) -> Result<Self> {
        let reference = TemplateReference::parse(&config.template.reference)?;
        Ok(Self::new(
            reference,
            source_for(config.template.clone_method),
            Box::new(CommandInstaller::new(config.package_manager)),
        ))
    }

    pub fn reference(&self) -> &TemplateReference {
        &self.reference
    }

    /// Create the project described by `request` inside `parent_dir`.
    ///
    /// The project root is `parent_dir/<project name>`; it is passed explicitly
    /// to every later stage and the process working directory is never changed.
    pub async fn run(
        &self,
        request: &ProjectRequest,
        parent_dir: &Utf8Path,
        observer: &dyn ScaffoldObserver,
    ) -> Result<ScaffoldOutcome> {
        let project_root = parent_dir.join(request.project_name());

        // 1. Template
        observer.on_materialize_start(request.project_name(), &self.reference);
        self.materialize(&project_root).await?;

        // 2. Dependencies
        let installed = if request.has_libraries() {
            observer.on_install_start(request.libraries());
            self.installer
                .install(&project_root, request.libraries())
                .await?;
            request.libraries().to_vec()
        } else {
            debug!("No libraries selected, skipping {}", self.installer.name());
            Vec::new()
        };

        // 3. Files
        observer.on_patch_start(&project_root);
        let layout = ProjectLayout::new(project_root.clone());
        let patched_files = write_project_files(&layout, request).await?;

        info!("Project {} ready at {}", request.project_name(), project_root);
        Ok(ScaffoldOutcome {
            project_root,
            installed,
            patched_files,
        })
    }

    async fn materialize(&self, project_root: &Utf8Path) -> Result<()> {
        if project_root.exists() {
            return Err(Error::template_clone(format!(
                "destination {} already exists",
                project_root
            )));
        }

        debug!("Materializing with {}", self.source.name());
        self.source.materialize(&self.reference, project_root).await?;

        if !project_root.is_dir() {
            return Err(Error::template_clone(format!(
                "{} did not create {}",
                self.source.name(),
                project_root
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Scaffolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scaffolder")
            .field("reference", &self.reference)
            .field("source", &self.source.name())
            .field("installer", &self.installer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opus_create_core::{CloneMethod, PackageManager};

    #[test]
    fn test_from_config() {
        let mut config = ScaffoldConfig::default();
        config.template.clone_method = CloneMethod::Git;
        config.package_manager = PackageManager::Yarn;

        let scaffolder = Scaffolder::from_config(&config).unwrap();
        assert_eq!(
            scaffolder.reference().url(),
            "https://github.com/IntendaUK/opus-ui-example"
        );
        let debug = format!("{:?}", scaffolder);
        assert!(debug.contains("\"git\""));
        assert!(debug.contains("\"yarn\""));
    }

    #[test]
    fn test_from_config_rejects_bad_reference() {
        let mut config = ScaffoldConfig::default();
        config.template.reference = "https://example.com/repo#".to_string();
        assert!(matches!(
            Scaffolder::from_config(&config),
            Err(Error::InvalidTemplateReference { .. })
        ));
    }
}
