//! Timepin Library
//!
//! Reproducibility wrapper that pins filesystem timestamps across a build
//! command: snapshot a tree's (atime, mtime) pairs, run the command with
//! pass-through stdio, then restore pre-existing entries and stamp newly
//! created ones with a deterministic fallback.

pub mod config;
pub mod executor;
pub mod fs;
pub mod restore;
pub mod snapshot;
pub mod utils;

// Re-export commonly used types
pub use fs::FileTimestamps;
pub use snapshot::TimestampSnapshot;
pub use utils::errors::TimepinError;
pub type Result<T> = std::result::Result<T, TimepinError>;
