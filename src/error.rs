//! Error type shared by the picker, the prompt and the launcher.

use std::io;
use std::path::PathBuf;

/// Everything that can stop a launch run.
///
/// Only the binary entrypoint turns these into an exit code; library functions
/// propagate them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The count prompt was dismissed without a number.
    #[error("client count prompt was cancelled")]
    CountCancelled,

    /// Spawning the selected executable failed on iteration `index`.
    #[error(
        "failed to launch {} (attempt {} of the run, {} already started): {source}",
        path.display(),
        index + 1,
        launched
    )]
    Spawn {
        path: PathBuf,
        index: u64,
        launched: usize,
        #[source]
        source: io::Error,
    },

    /// The native file dialog backend could not be used.
    #[error("file dialog failed: {0}")]
    Dialog(#[from] native_dialog::Error),

    /// Writing the echoed answers failed.
    #[error("console output failed: {0}")]
    Io(#[from] io::Error),
}

impl LaunchError {
    /// Number of children that were started before this error, if any.
    pub fn launched(&self) -> usize {
        match self {
            LaunchError::Spawn { launched, .. } => *launched,
            _ => 0,
        }
    }
}
