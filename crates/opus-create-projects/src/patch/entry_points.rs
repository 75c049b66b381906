//! Import injection into the application entry points
//!
//! Not idempotent: patching the same file twice prepends the header and the
//! import block twice. Existing imports are not detected.

use super::{read_text, write_text};
use crate::error::Result;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Comment line placed above the injected imports
pub const IMPORT_HEADER: &str = "//Opus Component Libraries";

/// One `import '<id>';` line per library, in selection order
pub fn import_block(libraries: &[String]) -> String {
    libraries
        .iter()
        .map(|library| format!("import '{}';", library))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<header>\n<imports>\n\n<content>`
pub fn prepend_imports(content: &str, libraries: &[String]) -> String {
    format!("{}\n{}\n\n{}", IMPORT_HEADER, import_block(libraries), content)
}

/// Prepend the import block to every entry point.
///
/// With no libraries selected the files are neither read nor written.
pub async fn add_imports_to_entry_points(
    entry_points: &[Utf8PathBuf],
    libraries: &[String],
) -> Result<Vec<Utf8PathBuf>> {
    if libraries.is_empty() {
        debug!("No libraries selected, entry points left untouched");
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(entry_points.len());
    for path in entry_points {
        add_imports_to_file(path, libraries).await?;
        written.push(path.clone());
    }
    Ok(written)
}

async fn add_imports_to_file(path: &Utf8Path, libraries: &[String]) -> Result<()> {
    let content = read_text(path).await?;
    write_text(path, prepend_imports(&content, libraries)).await?;
    info!("Added {} import(s) to {}", libraries.len(), path);
    Ok(())
}
