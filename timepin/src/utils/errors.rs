//! Custom error types for timepin.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimepinError {
    #[error("{0} is not a valid directory")]
    NotADirectory(PathBuf),

    #[error("cannot walk {path}: {source}")]
    WalkStart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("empty command")]
    EmptyCommand,

    #[error("failed to start command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("command '{command}' failed: {status}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimepinError>;
