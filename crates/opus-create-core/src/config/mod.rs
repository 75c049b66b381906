//! Configuration loading

mod loader;

pub use loader::{validate, ConfigLoader, ENV_CLONE_METHOD, ENV_PACKAGE_MANAGER, ENV_TEMPLATE};
