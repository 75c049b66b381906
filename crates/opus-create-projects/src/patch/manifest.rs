//! `package.json` project metadata

use super::json::{read_json_object, write_json_object};
use crate::error::Result;
use camino::Utf8Path;
use serde_json::{Map, Value};
use tracing::info;

/// Version every generated project starts at, whatever the template declares
pub const INITIAL_VERSION: &str = "1.0.0";

/// Set `name`, `description` and `version`; every other field is preserved
pub fn apply_project_info(manifest: &mut Map<String, Value>, name: &str, description: &str) {
    manifest.insert("name".to_string(), Value::String(name.to_string()));
    manifest.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );
    manifest.insert(
        "version".to_string(),
        Value::String(INITIAL_VERSION.to_string()),
    );
}

/// Rewrite the manifest at `path` with the project's name and description
pub async fn set_project_info(path: &Utf8Path, name: &str, description: &str) -> Result<()> {
    let mut manifest = read_json_object(path).await?;
    apply_project_info(&mut manifest, name, description);
    write_json_object(path, &manifest).await?;

    info!("Set project info in {}", path);
    Ok(())
}
