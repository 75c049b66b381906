//! `index.html` title substitution

use super::{read_text, write_text};
use crate::error::Result;
use camino::Utf8Path;
use tracing::{debug, info};

/// Title text shipped in the template's `index.html`
pub const TITLE_PLACEHOLDER: &str = "Opus UI Example";

/// Replace the first exact occurrence of the placeholder.
///
/// Matching is case-sensitive; without a match the input is returned unchanged.
pub fn substitute_title(html: &str, project_name: &str) -> String {
    html.replacen(TITLE_PLACEHOLDER, project_name, 1)
}

/// Rewrite the HTML file at `path` with the project name in the title.
///
/// The file is written back even when the placeholder is missing.
pub async fn set_project_name(path: &Utf8Path, project_name: &str) -> Result<()> {
    let html = read_text(path).await?;

    if !html.contains(TITLE_PLACEHOLDER) {
        debug!("No '{}' placeholder in {}", TITLE_PLACEHOLDER, path);
    }

    write_text(path, substitute_title(&html, project_name)).await?;
    info!("Set project name in {}", path);
    Ok(())
}
