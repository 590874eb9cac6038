//! Timestamp pairs read from and written to filesystem metadata.
//!
//! All reads and writes are no-follow: a symlink's own timestamps are
//! handled, never the target's.

use filetime::FileTime;
use std::fs::Metadata;
use std::io;
use std::path::Path;

/// The (access, modification) pair of a single filesystem entry.
///
/// Equality is exact on both fields down to the nanosecond; it decides
/// whether the restore pass skips the write for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimestamps {
    /// Last access time
    pub atime: FileTime,

    /// Last modification time
    pub mtime: FileTime,
}

impl FileTimestamps {
    /// Extract both timestamps from already-read metadata.
    ///
    /// `FileTime` reads the raw seconds + nanoseconds fields, so access
    /// time is preserved even where the portable time API would drop it.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            atime: FileTime::from_last_access_time(metadata),
            mtime: FileTime::from_last_modification_time(metadata),
        }
    }

    /// Read the timestamps of the entry at `path` without following symlinks.
    pub fn read(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::symlink_metadata(path)?;
        Ok(Self::from_metadata(&metadata))
    }

    /// A pair with both fields set to the same instant, as assigned to
    /// newly created entries.
    pub fn uniform(stamp: FileTime) -> Self {
        Self {
            atime: stamp,
            mtime: stamp,
        }
    }

    /// Write this pair onto the entry at `path`.
    ///
    /// Sets metadata on the link itself when `path` is a symlink, mirroring
    /// the no-follow read.
    pub fn apply(&self, path: &Path) -> io::Result<()> {
        filetime::set_symlink_file_times(path, self.atime, self.mtime)
    }
}
