//! Treepick - tri-state selectable folder tree with lazily loaded branches
//!
//! Treepick normalizes nested folder data into a canonical tree, keeps check
//! states consistent in both directions (a branch is checked, unchecked or
//! indeterminate according to its children), tracks a single chosen element,
//! and merges children fetched on demand without disturbing the rest of the
//! tree.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod store;
pub mod ui;

// Re-exports for convenience
pub use application::{LazyLoader, UnfoldReport};
pub use config::{Config, FetchConfig, TreeConfig};
pub use domain::entities::{Branch, BranchNode, Leaf};
pub use domain::ports::{FetchError, FetchRequest, Fetcher};
pub use domain::value_objects::{BranchStatus, CheckState, Level, NodeKind, NodeRef};
pub use error::{TreeError, TreeResult, UnfoldRejection};
pub use infrastructure::{LocalDirFetcher, ResponseMap};
pub use store::{Action, CommitOutcome, Store, UnfoldCompletion, UnfoldTicket};
