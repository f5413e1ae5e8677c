//! Domain Entities
//!
//! The canonical tree produced by the normalizer and owned by the store.
//! - `Branch` - Internal node with child branches and leaves
//! - `BranchNode` - Display state of a branch (open, check, status, chosen)
//! - `Leaf` - Terminal node

mod tree;

pub use tree::{Branch, BranchNode, Leaf};
