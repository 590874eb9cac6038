//! Timestamp snapshot of a directory tree before the command runs.

use crate::fs::{walk_tree, FileTimestamps};
use crate::utils::errors::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Original (access, modification) pairs keyed by path.
///
/// Built once by [`TimestampSnapshot::capture`] and read-only afterwards;
/// the restore pass consults it to decide how to treat each entry it finds.
#[derive(Debug, Default)]
pub struct TimestampSnapshot {
    entries: HashMap<PathBuf, FileTimestamps>,
}

impl TimestampSnapshot {
    /// Record the current timestamps of every entry under `root`, including
    /// the root itself.
    ///
    /// Pure read: nothing on the filesystem is modified. Entries that cannot
    /// be accessed are logged and left out, which the restore pass later
    /// treats the same as newly created paths.
    pub fn capture(root: &Path) -> Result<Self> {
        let mut entries = HashMap::new();
        walk_tree(root, |path, stamps| {
            entries.insert(path.to_path_buf(), *stamps);
            Ok(())
        })?;
        Ok(Self { entries })
    }

    /// Original timestamps recorded for `path`, if it existed at scan time.
    pub fn get(&self, path: &Path) -> Option<&FileTimestamps> {
        self.entries.get(path)
    }

    /// Number of entries recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
