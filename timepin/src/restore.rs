//! Timestamp restoration after the wrapped command has finished.
//!
//! Re-walks the tree and reconciles every entry against the pre-command
//! snapshot: pre-existing entries are pinned back to their recorded pair,
//! entries the command created get the fallback timestamp.

use crate::fs::{walk_tree, FileTimestamps};
use crate::snapshot::TimestampSnapshot;
use crate::utils::errors::Result;
use filetime::FileTime;
use std::path::Path;
use tracing::info;

/// Counts of how the restore pass classified the entries it visited.
///
/// Every visited entry lands in exactly one bucket; the decision depends
/// only on snapshot membership and timestamp equality, never on content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestoreStats {
    /// Entries whose current pair already equals the snapshot pair; no
    /// write was performed.
    pub unchanged: usize,

    /// Entries rewritten back to their snapshot pair.
    pub restored: usize,

    /// Entries absent from the snapshot, assigned the fallback timestamp.
    pub new_files: usize,
}

/// Walk `root` and reconcile each entry's timestamps against `snapshot`.
///
/// An entry found in the snapshot whose pair differs in either field gets
/// both fields written back to the recorded values; this includes entries
/// whose content never changed but whose access time drifted because the
/// command read them. Entries not in the snapshot get `fallback` for both
/// fields. Per-entry write failures are logged and skipped by the walker.
pub fn restore_tree(
    root: &Path,
    fallback: FileTime,
    snapshot: &TimestampSnapshot,
) -> Result<RestoreStats> {
    let mut stats = RestoreStats::default();

    walk_tree(root, |path, current| {
        let target = match snapshot.get(path) {
            None => {
                info!("found new file: {}", path.display());
                stats.new_files += 1;
                FileTimestamps::uniform(fallback)
            }
            Some(original) if original == current => {
                stats.unchanged += 1;
                return Ok(());
            }
            Some(original) => {
                info!("fixing timestamp for: {}", path.display());
                stats.restored += 1;
                *original
            }
        };
        target.apply(path)
    })?;

    Ok(stats)
}
