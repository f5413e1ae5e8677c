//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::CheckState;

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "treepick.toml";

/// Errors that make a config file unusable
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {file}: {message}")]
    Invalid { file: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `<root>/treepick.toml`, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let local_config = root.join(CONFIG_FILE_NAME);
        if local_config.exists() {
            match Config::load(&local_config) {
                Ok(config) => return with_env_overrides(config),
                Err(err) => tracing::warn!("ignoring {}: {err}", local_config.display()),
            }
        }
    }

    if let Some(user_config_dir) = dirs_config_dir() {
        let user_config = user_config_dir.join("treepick/config.toml");
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(err) => tracing::warn!("ignoring {}: {err}", user_config.display()),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (TREEPICK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(key) = std::env::var("TREEPICK_NODE_KEY") {
        config.tree.node = key;
    }
    if let Ok(key) = std::env::var("TREEPICK_BRANCH_KEY") {
        config.tree.branch = key;
    }
    if let Ok(key) = std::env::var("TREEPICK_LEAF_KEY") {
        config.tree.leaf = key;
    }

    // TREEPICK_OPEN
    if let Ok(val) = std::env::var("TREEPICK_OPEN") {
        config.tree.open = val.to_lowercase() == "true" || val == "1";
    }

    // TREEPICK_CHECK (-1, 0, 1 or checked/unchecked/indeterminate)
    if let Ok(val) = std::env::var("TREEPICK_CHECK") {
        if let Some(check) = parse_check(&val) {
            config.tree.check = check;
        }
    }

    if let Ok(id) = std::env::var("TREEPICK_ID") {
        config.tree.id = Some(id);
    }

    if let Ok(url) = std::env::var("TREEPICK_FETCH_URL") {
        config.fetch.url = Some(url);
    }

    // TREEPICK_VERBOSITY
    if let Ok(verbosity) = std::env::var("TREEPICK_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn parse_check(value: &str) -> Option<CheckState> {
    match value.trim().to_lowercase().as_str() {
        "-1" | "unchecked" => Some(CheckState::Unchecked),
        "0" | "indeterminate" => Some(CheckState::Indeterminate),
        "1" | "checked" => Some(CheckState::Checked),
        _ => None,
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "node",
        "branch",
        "leaf",
        "open",
        "check",
        "id",
        "fetch",
        "method",
        "url",
        "params",
        "data",
        "headers",
        "path_as",
        "output",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
