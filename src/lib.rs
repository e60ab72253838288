//! Client runner library crate
//!
//! This crate provides the core functionality for the `client-runner` CLI: pick
//! a client executable, ask how many copies to start, then start them as
//! independent processes. It is organized into small modules: `picker` (native
//! file dialog), `prompt` (count prompt), `session` (scoped dialog context),
//! `launcher` (fire-and-forget spawning) and `error`. The binary `src/main.rs`
//! calls `client_runner_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `run_with()` — the same flow over injectable dialogs, spawner and output.

pub mod error;
pub mod launcher;
pub mod picker;
pub mod prompt;
pub mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::LaunchError;
use crate::launcher::{ProcessSpawner, Spawner, launch};
use crate::session::{DialogSession, Dialogs, NativeDialogs, Preset};

/// Top-level CLI type. Every flag is optional; with none the dialogs ask.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Client executable to launch (skips the file picker)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Number of copies to launch (skips the count prompt)
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    count: Option<i64>,
}

/// Run the whole flow: ask, echo, then launch.
///
/// The dialog session is consumed before the first spawn. A cancelled count
/// fails with `LaunchError::CountCancelled` after both answers were echoed and
/// before anything is launched. Returns the number of started processes.
pub fn run_with<D, S, W>(dialogs: D, spawner: &mut S, out: &mut W) -> Result<usize, LaunchError>
where
    D: Dialogs,
    S: Spawner + ?Sized,
    W: Write,
{
    let selection = DialogSession::open(dialogs).collect(out)?;
    let count = selection.count.ok_or(LaunchError::CountCancelled)?;
    launch(spawner, &selection.path, count)
}

/// Parse the command line and run with native dialogs and real processes.
pub fn try_run() -> Result<usize, LaunchError> {
    let cli = Cli::parse();
    let dialogs = Preset {
        file: cli.file,
        count: cli.count,
        inner: NativeDialogs,
    };
    let stdout = io::stdout();
    run_with(dialogs, &mut ProcessSpawner, &mut stdout.lock())
}

/// Run the client-runner CLI.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`). Errors are
/// printed to stderr and the process exits with code 1; children that were
/// already started are left running.
///
/// ```no_run
/// client_runner_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = try_run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
