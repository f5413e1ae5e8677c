//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::FetchRequest;
use crate::domain::value_objects::CheckState;

use super::loader::{self, ConfigError, ConfigWarning};

/// Field mapping and defaults for the normalizer
///
/// ```toml
/// [tree]
/// node = "sourceDir"
/// branch = "dirs"
/// leaf = "files"
/// open = false
/// check = -1
/// id = "left-pane"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Key holding a branch name
    #[serde(default = "default_node_key")]
    pub node: String,

    /// Key holding child branches (objects or bare names)
    #[serde(default = "default_branch_key")]
    pub branch: String,

    /// Key holding leaf names
    #[serde(default = "default_leaf_key")]
    pub leaf: String,

    /// Initial expanded state of non-root branches
    #[serde(default)]
    pub open: bool,

    /// Initial check state of every branch and leaf
    #[serde(default)]
    pub check: CheckState,

    /// Opaque identifier echoed back in commit results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            node: default_node_key(),
            branch: default_branch_key(),
            leaf: default_leaf_key(),
            open: false,
            check: CheckState::Unchecked,
            id: None,
        }
    }
}

fn default_node_key() -> String {
    "name".to_string()
}

fn default_branch_key() -> String {
    "dirs".to_string()
}

fn default_leaf_key() -> String {
    "files".to_string()
}

/// Request template for the fetch collaborator
///
/// ```toml
/// [fetch]
/// method = "GET"
/// url = "http://localhost:1234"
/// path_as = "path"
///
/// [fetch.headers]
/// accept = "application/json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub params: BTreeMap<String, String>,

    #[serde(default)]
    pub data: BTreeMap<String, String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Parameter name under which the node path is sent
    #[serde(default = "default_path_as")]
    pub path_as: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            method: None,
            url: None,
            params: BTreeMap::new(),
            data: BTreeMap::new(),
            headers: BTreeMap::new(),
            path_as: default_path_as(),
        }
    }
}

impl FetchConfig {
    /// Request that asks for the children of the branch at `path`.
    ///
    /// GET (also the default when no method is set) carries the path in the
    /// query parameters; every other method carries it in the body.
    pub fn request_for(&self, path: &str) -> FetchRequest {
        let method = self
            .method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("GET")
            .to_uppercase();

        let mut params = self.params.clone();
        let mut data = self.data.clone();
        if method == "GET" {
            params.insert(self.path_as.clone(), path.to_string());
        } else {
            data.insert(self.path_as.clone(), path.to_string());
        }

        FetchRequest {
            method,
            url: self.url.clone(),
            params,
            data,
            headers: self.headers.clone(),
            path: path.to_string(),
        }
    }
}

fn default_path_as() -> String {
    "path".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from working-directory config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TREEPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
