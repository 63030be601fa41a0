//! Helpers for interactive tree viewers: mapping between source offsets and
//! line/column positions, and keyboard navigation over a collapsible tree.

pub mod navigation;
pub mod position;

pub use navigation::{flatten_tree, FlatNode};
pub use position::{Position, PositionMapper};
