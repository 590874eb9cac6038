//! Child-process execution for the wrapped build command.

use crate::utils::errors::{Result, TimepinError};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Run `command` (program followed by its arguments) to completion.
///
/// All three standard streams are inherited from this process, so the
/// command's output passes through verbatim. When `workdir` is given the
/// child starts there; otherwise it inherits our working directory.
///
/// A spawn failure or a non-zero exit is an error; the caller aborts the
/// pipeline in that case rather than restoring timestamps over an unknown,
/// possibly half-written tree.
pub fn run_command(command: &[String], workdir: Option<&Path>) -> Result<()> {
    let (program, args) = command.split_first().ok_or(TimepinError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(dir) = workdir {
        debug!("child working directory: {}", dir.display());
        cmd.current_dir(dir);
    }

    let status = cmd.status().map_err(|source| TimepinError::Spawn {
        command: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(TimepinError::CommandFailed {
            command: command.join(" "),
            status,
        });
    }

    Ok(())
}
