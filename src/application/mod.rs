//! Application Layer
//!
//! Use cases that drive the store together with infrastructure through the
//! domain ports.
//!
//! ## Use Cases
//!
//! - `LazyLoader` - Unfold a branch and, when its children are unknown,
//!   fetch and merge them

pub mod lazy_load;

pub use lazy_load::{LazyLoader, UnfoldReport};
