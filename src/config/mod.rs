//! Viewer configuration: a small TOML file in the platform config
//! directory, with defaults when the file is absent.

mod loader;
mod types;

pub use types::Config;
