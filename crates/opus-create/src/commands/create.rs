//! Default action: collect answers, then scaffold the project

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use opus_create_core::{ConfigLoader, PackageManager, ScaffoldConfig};
use opus_create_projects::{ScaffoldObserver, Scaffolder, TemplateReference};

use crate::cli::{Cli, OverrideArgs};
use crate::output;
use crate::prompt::{collect_request, TerminalPrompter};

/// Prints pipeline progress for the user
struct ConsoleObserver;

impl ScaffoldObserver for ConsoleObserver {
    fn on_materialize_start(&self, project_name: &str, reference: &TemplateReference) {
        output::info(&format!("Creating Opus UI project {}...", project_name));
        tracing::debug!("Template: {}", reference);
    }

    fn on_install_start(&self, libraries: &[String]) {
        output::info(&format!("Installing libraries: {}...", libraries.join(", ")));
    }

    fn on_patch_start(&self, _project_root: &Utf8Path) {
        output::info("Writing data to relevant files...");
    }
}

/// Run the whole pipeline
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), &cli.overrides)?;
    let scaffolder = Scaffolder::from_config(&config)?;

    let parent_dir = match &cli.project.directory {
        Some(dir) => dir.clone(),
        None => current_dir()?,
    };

    output::header("Create Opus UI App");
    output::kv("Template", &scaffolder.reference().to_string());

    // Nothing touches the filesystem before every answer is in.
    let request = collect_request(&cli.project, &config.catalog(), &mut TerminalPrompter)?;

    println!();
    let outcome = scaffolder
        .run(&request, &parent_dir, &ConsoleObserver)
        .await?;

    println!();
    output::success("Project setup is now complete.");
    output::kv("Location", outcome.project_root.as_str());
    if !outcome.installed.is_empty() {
        output::kv("Libraries", &outcome.installed.join(", "));
    }

    println!();
    output::info("Next steps:");
    println!("   1. cd {}", request.project_name());
    println!("   2. {}", start_command(config.package_manager));

    Ok(())
}

/// Layer command-line overrides on top of file and environment configuration
fn load_config(path: Option<&Utf8Path>, overrides: &OverrideArgs) -> Result<ScaffoldConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::with_file(path.to_path_buf()),
        None => ConfigLoader::new(),
    };

    let mut config = loader.load().context("Failed to load configuration")?;
    apply_overrides(&mut config, overrides);
    opus_create_core::config::validate(&config).context("Invalid configuration")?;

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

fn apply_overrides(config: &mut ScaffoldConfig, overrides: &OverrideArgs) {
    if let Some(template) = &overrides.template {
        config.template.reference = template.clone();
    }
    if let Some(method) = overrides.clone_method {
        config.template.clone_method = method;
    }
    if let Some(manager) = overrides.package_manager {
        config.package_manager = manager;
    }
}

fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().context("Failed to determine current directory")?;
    Utf8PathBuf::from_path_buf(dir)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}

fn start_command(manager: PackageManager) -> String {
    format!("{} start", manager.program())
}
