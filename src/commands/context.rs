//! Shared command setup: config resolution, input reading, output mode

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use serde_json::Value;
use tracing::warn;

use treepick::config::{Config, Verbosity};
use treepick::TreeError;

use crate::cli::Cli;

/// Everything a command handler needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub unicode: bool,
    pub config: Config,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let unicode = !cli.ascii && config.output.unicode && unicode_locale(|k| std::env::var(k).ok());
        Ok(Self {
            json: cli.json,
            unicode,
            config,
        })
    }

    /// Print resulting trees after operations
    pub fn show_trees(&self) -> bool {
        matches!(
            self.config.output.verbosity,
            Verbosity::Verbose | Verbosity::Debug
        )
    }

    pub fn quiet(&self) -> bool {
        self.config.output.verbosity == Verbosity::Quiet
    }
}

/// Explicit `--config` file (unknown keys warned), else the default lookup;
/// `TREEPICK_*` variables apply on top either way.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        let cwd = std::env::current_dir()?;
        return Ok(Config::load_or_default(Some(&cwd)));
    };

    let (config, warnings) = Config::load_with_warnings(path)?;
    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(config.with_env_overrides())
}

/// Parse tree data from a file, or stdin when `input` is `-`
pub fn read_tree_input(input: &Path) -> Result<Value> {
    let content = if input == Path::new("-") {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            bail!("refusing to read tree data from a terminal; pipe JSON into '-' or pass a file");
        }
        let mut content = String::new();
        stdin.read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    serde_json::from_str(&content).map_err(|e| {
        TreeError::InvalidData {
            file: input.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}

fn unicode_locale(get_env: impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for key in KEYS {
        if let Some(val) = get_env(key) {
            let val = val.to_lowercase();
            if val == "c" || val == "posix" {
                return false;
            }
            if val.contains("utf-8") || val.contains("utf8") {
                return true;
            }
        }
    }
    !get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"))
}
