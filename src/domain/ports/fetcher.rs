//! Fetcher port
//!
//! Supplies the children of a branch that was not known at construction
//! time. The store never fetches on its own: a caller takes the
//! `UnfoldTicket` from an unfold commit, asks a `Fetcher`, and hands the
//! outcome back to the store.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// HTTP-shaped description of a children request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FetchRequest {
    pub method: String,
    pub url: Option<String>,
    /// Query parameters (carry the node path for GET requests)
    pub params: BTreeMap<String, String>,
    /// Body fields (carry the node path for every other method)
    pub data: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    /// Semantic path of the branch being unfolded
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no data source configured")]
    NotConfigured,

    #[error("path not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fetch failed: {message}")]
    Failed { message: String },
}

/// Source of lazily loaded children.
///
/// `Ok(None)` and `Ok(Some(Value::Null))` both mean "nothing there"; the
/// store treats them like a failed fetch and marks the branch empty.
pub trait Fetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<Option<Value>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, request: &FetchRequest) -> Result<Option<Value>, FetchError> {
        (**self).fetch(request)
    }
}
