//! Template materialization through `npx degit`

use super::{TemplateReference, TemplateSource};
use crate::error::{Error, Result};
use crate::process::run_inherited;
use async_trait::async_trait;
use camino::Utf8Path;
use tracing::info;

/// Copies the template tree with `npx degit <reference> <destination>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DegitSource;

impl DegitSource {
    fn args(reference: &TemplateReference, destination: &Utf8Path) -> Vec<String> {
        vec![
            "degit".to_string(),
            reference.to_string(),
            destination.to_string(),
        ]
    }
}

#[async_trait]
impl TemplateSource for DegitSource {
    fn name(&self) -> &'static str {
        "degit"
    }

    async fn materialize(
        &self,
        reference: &TemplateReference,
        destination: &Utf8Path,
    ) -> Result<()> {
        info!("Copying template {} -> {}", reference, destination);

        run_inherited("npx", &Self::args(reference, destination), None)
            .await
            .map_err(|e| Error::template_clone(e.to_string()))?;

        info!("Template copied successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degit_args_keep_branch_suffix() {
        let reference =
            TemplateReference::parse("https://github.com/IntendaUK/opus-ui-example#main").unwrap();
        let args = DegitSource::args(&reference, Utf8Path::new("/work/my-app"));
        assert_eq!(
            args,
            vec![
                "degit",
                "https://github.com/IntendaUK/opus-ui-example#main",
                "/work/my-app"
            ]
        );
    }
}
