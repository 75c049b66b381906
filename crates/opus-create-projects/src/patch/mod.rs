//! In-place patching of the files a freshly materialized template provides
//!
//! Four independent read-modify-write mutations, applied in this order:
//! 1. [`entry_points`]: prepend library imports to `src/main.jsx` and `src/mainHybrid.jsx`
//! 2. [`opus_config`]: record the libraries in `.opusUiConfig`
//! 3. [`manifest`]: set name, description and version in `package.json`
//! 4. [`index_html`]: put the project name in the `index.html` title
//!
//! Each mutation fails on its own with [`Error::FilePatch`]. Mutations already
//! applied stay on disk; there is no rollback. No mutation creates a file that
//! the template did not provide.

pub mod entry_points;
pub mod index_html;
pub mod json;
pub mod manifest;
pub mod opus_config;

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use opus_create_core::ProjectRequest;
use tracing::{debug, info};

pub const MAIN_ENTRY_POINT: &str = "src/main.jsx";
pub const HYBRID_ENTRY_POINT: &str = "src/mainHybrid.jsx";
pub const OPUS_UI_CONFIG: &str = ".opusUiConfig";
pub const PACKAGE_MANIFEST: &str = "package.json";
pub const INDEX_HTML: &str = "index.html";

/// Locations of the patched files, resolved against an explicit project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: Utf8PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Main entry point followed by the hybrid variant
    pub fn entry_points(&self) -> [Utf8PathBuf; 2] {
        [
            self.root.join(MAIN_ENTRY_POINT),
            self.root.join(HYBRID_ENTRY_POINT),
        ]
    }

    pub fn opus_ui_config(&self) -> Utf8PathBuf {
        self.root.join(OPUS_UI_CONFIG)
    }

    pub fn package_manifest(&self) -> Utf8PathBuf {
        self.root.join(PACKAGE_MANIFEST)
    }

    pub fn index_html(&self) -> Utf8PathBuf {
        self.root.join(INDEX_HTML)
    }
}

/// Apply all four mutations for `request`, returning the files written in order
pub async fn write_project_files(
    layout: &ProjectLayout,
    request: &ProjectRequest,
) -> Result<Vec<Utf8PathBuf>> {
    info!("Writing project data into {}", layout.root());
    let mut written = Vec::new();

    written.extend(
        entry_points::add_imports_to_entry_points(&layout.entry_points(), request.libraries())
            .await?,
    );

    // Ensembles are not collected yet; the list stays empty.
    if opus_config::add_entries_to_opus_ui_config(
        &layout.opus_ui_config(),
        request.libraries(),
        &[],
    )
    .await?
    {
        written.push(layout.opus_ui_config());
    }

    manifest::set_project_info(
        &layout.package_manifest(),
        request.project_name(),
        request.project_description(),
    )
    .await?;
    written.push(layout.package_manifest());

    index_html::set_project_name(&layout.index_html(), request.project_name()).await?;
    written.push(layout.index_html());

    debug!("Patched {} file(s)", written.len());
    Ok(written)
}

/// Read a whole UTF-8 file; a missing file is a patch failure
pub(crate) async fn read_text(path: &Utf8Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::file_patch(path, format!("could not read file: {}", e)))
}

/// Overwrite a file completely
pub(crate) async fn write_text(path: &Utf8Path, contents: impl AsRef<[u8]>) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| Error::file_patch(path, format!("could not write file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("/work/my-app");
        assert_eq!(
            layout.entry_points(),
            [
                Utf8PathBuf::from("/work/my-app/src/main.jsx"),
                Utf8PathBuf::from("/work/my-app/src/mainHybrid.jsx"),
            ]
        );
        assert_eq!(
            layout.opus_ui_config(),
            Utf8PathBuf::from("/work/my-app/.opusUiConfig")
        );
        assert_eq!(
            layout.package_manifest(),
            Utf8PathBuf::from("/work/my-app/package.json")
        );
        assert_eq!(layout.index_html(), Utf8PathBuf::from("/work/my-app/index.html"));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_patch_error() {
        let err = read_text(Utf8Path::new("/nonexistent/opus/index.html"))
            .await
            .unwrap_err();
        match err {
            Error::FilePatch { path, cause } => {
                assert_eq!(path, "/nonexistent/opus/index.html");
                assert!(cause.starts_with("could not read file"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
