//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (`<config dir>/create-opus-ui-app/config.yaml`, or an explicit path)
//! 3. Environment variables (`OPUS_CREATE_*` prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::{CloneMethod, PackageManager, ScaffoldConfig};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::collections::HashSet;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "scaffold-defaults.yaml";
const APP_DIR_NAME: &str = "create-opus-ui-app";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Overrides the template reference
pub const ENV_TEMPLATE: &str = "OPUS_CREATE_TEMPLATE";
/// Overrides the clone method (`degit` or `git`)
pub const ENV_CLONE_METHOD: &str = "OPUS_CREATE_CLONE_METHOD";
/// Overrides the package manager
pub const ENV_PACKAGE_MANAGER: &str = "OPUS_CREATE_PACKAGE_MANAGER";

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// User configuration file, if one can be located
    config_file: Option<Utf8PathBuf>,

    /// Whether a missing `config_file` is an error
    required: bool,
}

impl ConfigLoader {
    /// Loader reading the user config from the platform config directory, if present
    pub fn new() -> Self {
        Self {
            config_file: Self::default_config_file(),
            required: false,
        }
    }

    /// Loader reading `config.yaml` from a custom directory, if present
    pub fn with_dir(config_dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            config_file: Some(config_dir.as_ref().join(CONFIG_FILE_NAME)),
            required: false,
        }
    }

    /// Loader reading an explicit config file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
            required: true,
        }
    }

    fn default_config_file() -> Option<Utf8PathBuf> {
        dirs::config_dir()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the scaffold configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        // Start with embedded defaults
        let mut value = Self::load_embedded_defaults()?;

        // Layer the user config file on top
        if let Some(path) = &self.config_file {
            if path.exists() {
                debug!("Loading user config from {}", path);
                let overlay = Self::load_yaml_file(path)?;
                merge_values(&mut value, overlay);
            } else if self.required {
                return Err(Error::config_not_found(path.as_str()));
            }
        }

        let mut config: ScaffoldConfig = serde_yaml_ng::from_value(value)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        Self::apply_env_overrides(&mut config)?;
        validate(&config)?;

        Ok(config)
    }

    /// Load the embedded defaults as an untyped YAML tree
    fn load_embedded_defaults() -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: &mut ScaffoldConfig) -> Result<()> {
        if let Ok(val) = env::var(ENV_TEMPLATE) {
            config.template.reference = val;
        }

        if let Ok(val) = env::var(ENV_CLONE_METHOD) {
            config.template.clone_method = val.parse::<CloneMethod>()?;
        }

        if let Ok(val) = env::var(ENV_PACKAGE_MANAGER) {
            config.package_manager = val.parse::<PackageManager>()?;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Check values that deserialize fine but cannot drive a run
pub fn validate(config: &ScaffoldConfig) -> Result<()> {
    if config.template.reference.trim().is_empty() {
        return Err(Error::invalid_config("template reference cannot be empty"));
    }
    if let Some(blank) = config.libraries.iter().find(|l| l.trim().is_empty()) {
        return Err(Error::invalid_config(format!(
            "library identifiers cannot be blank (got '{}')",
            blank
        )));
    }
    let mut seen = HashSet::new();
    if let Some(repeated) = config.libraries.iter().find(|l| !seen.insert(l.as_str())) {
        return Err(Error::invalid_config(format!(
            "library '{}' is listed more than once",
            repeated
        )));
    }
    Ok(())
}

/// Overlay `overlay` onto `base`: mappings merge key by key, anything else replaces.
/// A null overlay (e.g. an empty file) keeps the base.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, overlay) => *slot = overlay,
    }
}
