//! Per-process diagnostic logging
//!
//! Each invocation appends to its own file, `<log_dir>/sinkcycle.log.<pid>`,
//! so runs triggered in quick succession from a shortcut never interleave.
//! Write-only observability; nothing in the tool reads it back.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::Level;

/// Install the global subscriber writing to the per-pid diagnostic file.
///
/// Returns the log file path. The core modules only emit through the
/// `tracing` facade; tests run without any subscriber and touch no files.
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let path = log_file_path(log_dir, std::process::id());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .init();

    Ok(path)
}

/// Render the log file path for a given directory and pid.
pub fn log_file_path(log_dir: &Path, pid: u32) -> PathBuf {
    log_dir.join(format!("sinkcycle.log.{pid}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_files_are_keyed_by_pid() {
        let path = log_file_path(Path::new("/tmp"), 4242);
        assert_eq!(path, PathBuf::from("/tmp/sinkcycle.log.4242"));
    }
}
