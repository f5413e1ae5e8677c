//! Text presentation of a tree

pub mod theme;
pub mod tree_view;

pub use tree_view::TreeView;
