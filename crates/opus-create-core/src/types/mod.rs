//! Type definitions shared by the scaffolding pipeline

mod catalog;
mod request;
mod scaffold_config;

pub use catalog::LibraryCatalog;
pub use request::{validate_project_name, ProjectRequest};
pub use scaffold_config::{CloneMethod, PackageManager, ScaffoldConfig, TemplateConfig};
