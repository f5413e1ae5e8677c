//! Configuration module for treepick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEPICK_*)
//! 3. Explicit `--config` file, else `./treepick.toml`
//! 4. User config (~/.config/treepick/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigError, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, FetchConfig, OutputConfig, TreeConfig, Verbosity};
