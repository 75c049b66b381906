//! Catalog of Opus UI component libraries offered at scaffold time

use crate::error::{Error, Result};

/// Libraries offered when no configuration overrides the catalog
pub const DEFAULT_LIBRARIES: &[&str] = &[
    "@intenda/opus-ui-components",
    "@intenda/opus-ui-drag-move",
    "@intenda/opus-ui-grid",
    "@intenda/opus-ui-repeater-grid",
    "@intenda/opus-ui-code-editor",
    "@intenda/opus-ui-svg",
    "@intenda/opus-ui-zoom-panner",
    "@intenda/opus-ui-pdf-viewer",
    "@intenda/opus-ui-json-builder",
    "@intenda/opus-ui-map-location-iq",
    "@intenda/opus-ui-expo-interface",
];

/// Ordered, immutable list of selectable library identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCatalog {
    libraries: Vec<String>,
}

impl LibraryCatalog {
    pub fn new(libraries: Vec<String>) -> Self {
        Self { libraries }
    }

    /// All identifiers in presentation order
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn contains(&self, library: &str) -> bool {
        self.libraries.iter().any(|l| l == library)
    }

    /// Fail with `UnknownLibrary` unless every identifier is in the catalog
    pub fn ensure_known<S: AsRef<str>>(&self, selection: &[S]) -> Result<()> {
        for library in selection {
            let library = library.as_ref();
            if !self.contains(library) {
                return Err(Error::unknown_library(library, self.libraries.join(", ")));
            }
        }
        Ok(())
    }

    /// Map multi-select indices back to identifiers, in the order given.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .filter_map(|&i| self.libraries.get(i).cloned())
            .collect()
    }
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect())
    }
}
