//! Fetcher implementations
//!
//! - `LocalDirFetcher` - lists directories on the local disk
//! - `ResponseMap` - answers from a path-keyed JSON document

mod local;
mod response_map;

pub use local::LocalDirFetcher;
pub use response_map::ResponseMap;
