//! Timepin - Main entry point
//!
//! Runs a build command inside a directory tree while pinning filesystem
//! timestamps, so the output is reproducible with respect to file metadata.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use timepin::{config, executor, restore, snapshot::TimestampSnapshot, utils};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory tree whose timestamps are pinned
    dir: PathBuf,

    /// Command to execute, with its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,

    /// Change to <DIR> before executing the command
    #[arg(long = "cd")]
    change_dir: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    utils::logger::init(&args.log_level)?;

    if !args.dir.is_dir() {
        bail!("{} is not a valid directory", args.dir.display());
    }
    // Canonicalize once so both walks key the snapshot by the same
    // absolute paths.
    let dir = args
        .dir
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", args.dir.display()))?;

    let workdir = args.change_dir.then_some(dir.as_path());
    let fallback = config::fallback_timestamp();

    tracing::info!("scanning original timestamps in {}", dir.display());
    let original = TimestampSnapshot::capture(&dir)
        .with_context(|| format!("scanning {}", dir.display()))?;
    tracing::info!("found {} files/directories", original.len());

    tracing::info!("executing command: {}", args.command.join(" "));
    executor::run_command(&args.command, workdir)?;

    tracing::info!("restoring timestamps");
    let stats = restore::restore_tree(&dir, fallback, &original)
        .with_context(|| format!("restoring timestamps in {}", dir.display()))?;
    tracing::info!(
        "restore complete: {} unchanged, {} fixed, {} new",
        stats.unchanged,
        stats.restored,
        stats.new_files
    );

    Ok(())
}
