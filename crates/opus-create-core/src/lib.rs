//! # opus-create-core
//!
//! Core library for `create-opus-ui-app` providing:
//! - Scaffold configuration (embedded defaults, user config file, environment overrides)
//! - The project request collected from the user
//! - The catalog of selectable Opus UI component libraries

pub mod config;
pub mod error;
pub mod types;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use types::{
    validate_project_name, CloneMethod, LibraryCatalog, PackageManager, ProjectRequest,
    ScaffoldConfig, TemplateConfig,
};
