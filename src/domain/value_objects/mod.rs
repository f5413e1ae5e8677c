//! Domain Value Objects
//!
//! Immutable value types that describe positions and states in the tree.

mod branch_status;
mod check_state;
mod level;
mod node_ref;

pub use branch_status::BranchStatus;
pub use check_state::CheckState;
pub use level::Level;
pub use node_ref::{NodeKind, NodeRef};
