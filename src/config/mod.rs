//! TOML configuration: types and loader.

mod loader;
mod types;

pub use loader::{default_path, load_from, ConfigError};
pub use types::Config;
