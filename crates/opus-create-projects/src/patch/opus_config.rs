//! `.opusUiConfig` library and ensemble registration

use super::json::{read_json_object, write_json_object};
use crate::error::Result;
use camino::Utf8Path;
use serde_json::{Map, Value};
use tracing::{debug, info};

pub const LIBRARIES_KEY: &str = "opusUiComponentLibraries";
pub const ENSEMBLES_KEY: &str = "opusUiEnsembles";

/// Overwrite each field whose input list is non-empty; other fields are left alone
pub fn apply_entries(config: &mut Map<String, Value>, libraries: &[String], ensembles: &[String]) {
    if !libraries.is_empty() {
        config.insert(LIBRARIES_KEY.to_string(), string_array(libraries));
    }
    if !ensembles.is_empty() {
        config.insert(ENSEMBLES_KEY.to_string(), string_array(ensembles));
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// Register libraries and ensembles in the config file at `path`.
///
/// When both lists are empty the file is not touched at all. Returns whether
/// the file was rewritten.
pub async fn add_entries_to_opus_ui_config(
    path: &Utf8Path,
    libraries: &[String],
    ensembles: &[String],
) -> Result<bool> {
    if libraries.is_empty() && ensembles.is_empty() {
        debug!("Nothing to register, {} left untouched", path);
        return Ok(false);
    }

    let mut config = read_json_object(path).await?;
    apply_entries(&mut config, libraries, ensembles);
    write_json_object(path, &config).await?;

    info!("Updated {}", path);
    Ok(true)
}
