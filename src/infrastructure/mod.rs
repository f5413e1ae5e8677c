//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fetch/` - `Fetcher` implementations (local directories, canned responses)

pub mod fetch;

pub use fetch::{LocalDirFetcher, ResponseMap};
