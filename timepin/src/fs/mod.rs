//! Filesystem primitives: timestamp metadata and tree traversal.

pub mod timestamps;
pub mod walker;

pub use timestamps::FileTimestamps;
pub use walker::walk_tree;
