//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use opus_create_core::{CloneMethod, PackageManager};

/// CLI to create an Opus UI app with preinstalled libraries
#[derive(Parser, Debug)]
#[command(name = "create-opus-ui-app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file (default: <config dir>/create-opus-ui-app/config.yaml)
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Answers that would otherwise be prompted for
#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Project name (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project description (skips the description prompt)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Library to install; repeat for several (skips the library prompt)
    #[arg(short, long = "library", value_name = "LIBRARY")]
    pub libraries: Vec<String>,

    /// Accept defaults for unanswered optional prompts (empty description, no libraries)
    #[arg(short, long)]
    pub yes: bool,

    /// Directory to create the project in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub directory: Option<Utf8PathBuf>,
}

/// Per-run overrides of the loaded configuration
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Template reference, <url>[#<branch>]
    #[arg(long, value_name = "REF")]
    pub template: Option<String>,

    /// How to fetch the template (degit, git)
    #[arg(long, value_name = "METHOD")]
    pub clone_method: Option<CloneMethod>,

    /// Package manager used to install libraries (npm, pnpm, yarn, bun)
    #[arg(long, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_interactively() {
        let cli = Cli::try_parse_from(["create-opus-ui-app"]).unwrap();
        assert!(cli.project.name.is_none());
        assert!(cli.project.libraries.is_empty());
        assert!(!cli.project.yes);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_repeated_library_flags_keep_order() {
        let cli = Cli::try_parse_from([
            "create-opus-ui-app",
            "--name",
            "my-app",
            "-l",
            "@intenda/opus-ui-grid",
            "--library",
            "@intenda/opus-ui-svg",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.project.name.as_deref(), Some("my-app"));
        assert_eq!(
            cli.project.libraries,
            vec!["@intenda/opus-ui-grid", "@intenda/opus-ui-svg"]
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from([
            "create-opus-ui-app",
            "--clone-method",
            "git",
            "--package-manager",
            "pnpm",
            "--template",
            "https://example.com/t.git#dev",
        ])
        .unwrap();
        assert_eq!(cli.overrides.clone_method, Some(CloneMethod::Git));
        assert_eq!(cli.overrides.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(
            cli.overrides.template.as_deref(),
            Some("https://example.com/t.git#dev")
        );
    }

    #[test]
    fn test_invalid_package_manager_rejected() {
        assert!(Cli::try_parse_from(["create-opus-ui-app", "--package-manager", "maven"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["create-opus-ui-app", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
