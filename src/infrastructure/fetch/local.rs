//! Local directory fetcher
//!
//! Serves the children of a directory one level at a time, in the shape the
//! normalizer reads. Semantic paths are the canonical filesystem paths, so a
//! request for `/srv/www` lists `/srv/www`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::TreeConfig;
use crate::domain::ports::{FetchError, FetchRequest, Fetcher};

#[derive(Debug, Clone)]
pub struct LocalDirFetcher {
    root: PathBuf,
    node_key: String,
    branch_key: String,
    leaf_key: String,
    hidden: bool,
}

impl LocalDirFetcher {
    /// Serve directories under `root`, emitting field names from `keys`
    pub fn new(root: &Path, keys: &TreeConfig) -> Result<Self, FetchError> {
        let root = root.canonicalize().map_err(|source| FetchError::Io {
            path: root.display().to_string(),
            source,
        })?;
        if !root.is_dir() {
            return Err(FetchError::NotFound {
                path: root.display().to_string(),
            });
        }

        Ok(Self {
            root,
            node_key: keys.node.clone(),
            branch_key: keys.branch.clone(),
            leaf_key: keys.leaf.clone(),
            hidden: false,
        })
    }

    /// Include dot-files and entries matched by ignore files
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Construction input for a store: the root listing plus its `path`
    pub fn root_data(&self) -> Result<Value, FetchError> {
        let mut data = self.list(&self.root)?;
        if let Value::Object(map) = &mut data {
            map.insert(
                "path".to_string(),
                Value::String(self.root.display().to_string()),
            );
        }
        Ok(data)
    }

    /// One-level listing of `dir`, directories and files each sorted by name
    pub fn list(&self, dir: &Path) -> Result<Value, FetchError> {
        let mut walker = WalkBuilder::new(dir);
        walker
            .max_depth(Some(1))
            .standard_filters(!self.hidden)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in walker.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Some(kind) if kind.is_dir() => dirs.push(Value::String(name)),
                Some(_) => files.push(Value::String(name)),
                None => {}
            }
        }

        debug!(dir = %dir.display(), dirs = dirs.len(), files = files.len(), "listed directory");

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "/".to_string());
        let mut map = Map::new();
        map.insert(self.node_key.clone(), Value::String(name));
        map.insert(self.branch_key.clone(), Value::Array(dirs));
        map.insert(self.leaf_key.clone(), Value::Array(files));
        Ok(Value::Object(map))
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let not_found = || FetchError::NotFound {
            path: path.to_string(),
        };
        let resolved = Path::new(path).canonicalize().map_err(|_| not_found())?;
        if !resolved.starts_with(&self.root) || !resolved.is_dir() {
            return Err(not_found());
        }
        Ok(resolved)
    }
}

impl Fetcher for LocalDirFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<Option<Value>, FetchError> {
        let dir = self.resolve(&request.path)?;
        self.list(&dir).map(Some)
    }
}
