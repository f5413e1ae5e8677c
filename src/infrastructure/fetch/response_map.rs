//! Canned responses keyed by semantic path
//!
//! ```json
//! { "/root/subroot-1/empty 1": { "files": ["a", "b"] } }
//! ```
//!
//! Used by `treepick apply --responses` to replay lazy loads without a server.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::domain::ports::{FetchError, FetchRequest, Fetcher};
use crate::error::{TreeError, TreeResult};

#[derive(Debug, Clone, Default)]
pub struct ResponseMap {
    responses: BTreeMap<String, Value>,
}

impl ResponseMap {
    pub fn new(responses: BTreeMap<String, Value>) -> Self {
        Self { responses }
    }

    pub fn load(path: &Path) -> TreeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let responses =
            serde_json::from_str(&content).map_err(|e| TreeError::InvalidData {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self::new(responses))
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Fetcher for ResponseMap {
    fn fetch(&self, request: &FetchRequest) -> Result<Option<Value>, FetchError> {
        Ok(self.responses.get(&request.path).cloned())
    }
}
