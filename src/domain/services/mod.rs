//! Domain Services
//!
//! Stateless algorithms over the canonical tree.

pub mod lookup;
pub mod normalizer;
pub mod path_result;
pub mod propagation;

pub use normalizer::{denormalize, join_path, normalize, normalize_root};
pub use path_result::selected_paths;
pub use propagation::{aggregate, check_ascendants, check_descendants, is_consistent};
