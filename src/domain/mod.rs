//! Domain Layer
//!
//! The tree model itself: pure data and algorithms without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Canonical tree (Branch, BranchNode, Leaf)
//! - `value_objects/` - Immutable value types (Level, CheckState, BranchStatus, NodeRef)
//! - `services/` - Normalizer, check propagation, path results
//! - `ports/` - Fetcher interface for lazily loaded children
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Fetching goes through the `Fetcher` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
