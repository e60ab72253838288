//! Fire-and-forget process launching.
//!
//! `launch` runs the selected executable `count` times. Children are never
//! waited on: each `Child` handle is dropped right after the spawn returns, so
//! the children outlive this process and keep the inherited stdio.
//!
//! The loop is fail-fast. The first spawn error stops the run and is returned;
//! children started before it keep running.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::LaunchError;

/// Something that can start one copy of an executable.
pub trait Spawner {
    /// Start `path` with no arguments and return its pid without waiting.
    fn spawn(&mut self, path: &Path) -> io::Result<u32>;
}

/// Production spawner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&mut self, path: &Path) -> io::Result<u32> {
        let child = Command::new(path).spawn()?;
        Ok(child.id())
    }
}

/// Launch `count` independent copies of `path` through `spawner`.
///
/// A zero or negative `count` launches nothing. Returns the number of started
/// processes, which equals `max(count, 0)` on success.
pub fn launch<S: Spawner + ?Sized>(
    spawner: &mut S,
    path: &Path,
    count: i64,
) -> Result<usize, LaunchError> {
    let total = count.max(0) as u64;
    let mut launched = 0usize;

    for index in 0..total {
        match spawner.spawn(path) {
            Ok(pid) => {
                launched += 1;
                debug!(pid, index, path = %path.display(), "client started");
            }
            Err(source) => {
                warn!(
                    index,
                    launched,
                    remaining = total - index,
                    path = %path.display(),
                    "spawn failed, aborting remaining launches"
                );
                return Err(LaunchError::Spawn {
                    path: path.to_path_buf(),
                    index,
                    launched,
                    source,
                });
            }
        }
    }

    info!(launched, path = %path.display(), "launch finished");
    Ok(launched)
}
