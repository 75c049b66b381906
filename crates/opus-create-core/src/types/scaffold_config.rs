//! Scaffold configuration types
//!
//! These types describe where the template comes from, how it is fetched,
//! which package manager installs libraries and which libraries are offered.

use crate::error::{Error, Result};
use crate::types::catalog::{LibraryCatalog, DEFAULT_LIBRARIES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete scaffold configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Template repository settings
    #[serde(default)]
    pub template: TemplateConfig,

    /// Package manager used to install selected libraries
    #[serde(default)]
    pub package_manager: PackageManager,

    /// Library identifiers offered for selection, in display order
    #[serde(default = "default_libraries")]
    pub libraries: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            package_manager: PackageManager::default(),
            libraries: default_libraries(),
        }
    }
}

impl ScaffoldConfig {
    /// Catalog built from the configured library list
    pub fn catalog(&self) -> LibraryCatalog {
        LibraryCatalog::new(self.libraries.clone())
    }
}

/// Template repository settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Template reference, `<url>[#<branch>]`
    #[serde(default = "default_template_reference")]
    pub reference: String,

    /// How the template is fetched
    #[serde(default)]
    pub clone_method: CloneMethod,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            reference: default_template_reference(),
            clone_method: CloneMethod::default(),
        }
    }
}

fn default_template_reference() -> String {
    "https://github.com/IntendaUK/opus-ui-example#main".to_string()
}

fn default_libraries() -> Vec<String> {
    DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect()
}

/// Mechanism used to materialize the template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneMethod {
    /// `npx degit`, copies the tree without git history
    #[default]
    Degit,
    /// Shallow `git clone`
    Git,
}

impl FromStr for CloneMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "degit" => Ok(Self::Degit),
            "git" => Ok(Self::Git),
            other => Err(Error::invalid_config(format!(
                "unknown clone method '{}', expected one of: degit, git",
                other
            ))),
        }
    }
}

impl fmt::Display for CloneMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degit => write!(f, "degit"),
            Self::Git => write!(f, "git"),
        }
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Subcommand that adds packages to the project
    pub fn install_verb(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(Error::invalid_config(format!(
                "unknown package manager '{}', expected one of: npm, pnpm, yarn, bun",
                other
            ))),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::default();
        assert_eq!(
            config.template.reference,
            "https://github.com/IntendaUK/opus-ui-example#main"
        );
        assert_eq!(config.template.clone_method, CloneMethod::Degit);
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert_eq!(config.catalog(), LibraryCatalog::default());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = r#"
package-manager: pnpm
template:
  clone-method: git
"#;
        let config: ScaffoldConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.package_manager, PackageManager::Pnpm);
        assert_eq!(config.template.clone_method, CloneMethod::Git);
        assert_eq!(config.template.reference, default_template_reference());
        assert_eq!(config.libraries.len(), DEFAULT_LIBRARIES.len());
    }

    #[test]
    fn test_parse_clone_method() {
        assert_eq!("degit".parse::<CloneMethod>().unwrap(), CloneMethod::Degit);
        assert_eq!(" GIT ".parse::<CloneMethod>().unwrap(), CloneMethod::Git);
        assert!("svn".parse::<CloneMethod>().is_err());
    }

    #[test]
    fn test_package_manager_commands() {
        assert_eq!(PackageManager::Npm.install_verb(), "install");
        assert_eq!(PackageManager::Yarn.install_verb(), "add");
        assert_eq!("bun".parse::<PackageManager>().unwrap().program(), "bun");
        assert!("cargo".parse::<PackageManager>().is_err());
    }
}
