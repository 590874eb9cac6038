//! Directory traversal shared by the scan and restore passes.
//!
//! Both passes are the same walk with a different per-entry action, so the
//! traversal lives here once, parameterized over a visitor.

use crate::fs::timestamps::FileTimestamps;
use crate::utils::errors::{Result, TimepinError};
use std::io;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Walk the tree rooted at `root`, calling `visit` with each entry's path
/// and current timestamps.
///
/// The walk covers the root itself plus every directory, regular file, and
/// symlink below it. Symlinks are not followed; their own metadata is read.
///
/// Error tolerance: failing to reach the root at all is fatal, but a single
/// entry that cannot be read or that the visitor fails to handle is logged
/// as a warning and skipped, and the walk continues. Skipped entries get no
/// second attempt.
pub fn walk_tree<V>(root: &Path, mut visit: V) -> Result<()>
where
    V: FnMut(&Path, &FileTimestamps) -> io::Result<()>,
{
    std::fs::symlink_metadata(root).map_err(|source| TimepinError::WalkStart {
        path: root.to_path_buf(),
        source,
    })?;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("cannot access {}: {}", describe_entry(&e), e);
                continue;
            }
        };

        // With follow_links(false) this is the entry's own (symlink)
        // metadata, not the target's.
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("cannot read metadata for {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let stamps = FileTimestamps::from_metadata(&metadata);
        if let Err(e) = visit(entry.path(), &stamps) {
            warn!("cannot update {}: {}", entry.path().display(), e);
        }
    }

    Ok(())
}

fn describe_entry(error: &walkdir::Error) -> String {
    error
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown path>".to_string())
}
