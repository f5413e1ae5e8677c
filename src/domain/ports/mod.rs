//! Domain Ports
//!
//! Interfaces the domain needs from the outside world.

mod fetcher;

pub use fetcher::{FetchError, FetchRequest, Fetcher};
