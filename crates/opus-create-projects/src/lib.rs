//! # opus-create-projects
//!
//! Project scaffolding library for `create-opus-ui-app` providing:
//! - Template materialization (`npx degit` or a shallow `git clone`)
//! - Library installation through npm, pnpm, yarn or bun
//! - In-place patching of the template's entry points, `.opusUiConfig`,
//!   `package.json` and `index.html`
//! - The [`Scaffolder`] pipeline tying the stages together
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use opus_create_core::{ProjectRequest, ScaffoldConfig};
//! use opus_create_projects::{NoOpObserver, Scaffolder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scaffolder = Scaffolder::from_config(&ScaffoldConfig::default())?;
//! let request = ProjectRequest::new(
//!     "my-app",
//!     "Dashboard for the ops team",
//!     vec!["@intenda/opus-ui-grid".to_string()],
//! )?;
//!
//! let outcome = scaffolder
//!     .run(&request, Utf8Path::new("/work"), &NoOpObserver)
//!     .await?;
//! println!("created {}", outcome.project_root);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod install;
pub mod patch;
pub mod pipeline;
pub mod process;
pub mod template;

pub use error::{Error, Result};
pub use install::{CommandInstaller, PackageInstaller};
pub use patch::{write_project_files, ProjectLayout};
pub use pipeline::{NoOpObserver, ScaffoldObserver, ScaffoldOutcome, Scaffolder};
pub use template::{source_for, DegitSource, GitSource, TemplateReference, TemplateSource};
