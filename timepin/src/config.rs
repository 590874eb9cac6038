//! Run configuration: the fallback timestamp for newly created files.
//!
//! `SOURCE_DATE_EPOCH` is the reproducible-builds convention for an
//! externally pinned build date, as integer seconds since the Unix epoch.
//! It is resolved once at startup and threaded into the restore pass as a
//! plain value, so the core never touches the process environment.

use filetime::FileTime;

/// Environment variable holding the fallback timestamp in epoch seconds.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Resolve the fallback timestamp from the process environment.
pub fn fallback_timestamp() -> FileTime {
    fallback_from(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref())
}

/// Resolve the fallback timestamp from an optional raw variable value.
///
/// Unset or unparseable values fall back to epoch zero rather than failing
/// the run.
pub fn fallback_from(value: Option<&str>) -> FileTime {
    value
        .and_then(|raw| raw.parse::<i64>().ok())
        .map(|seconds| FileTime::from_unix_time(seconds, 0))
        .unwrap_or_else(FileTime::zero)
}
