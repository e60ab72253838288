//! Scoped interactive context.
//!
//! A `DialogSession` owns whatever is needed to ask the two questions. It is
//! consumed by `collect`, so the dialogs are released before the launcher
//! starts any process.

use std::io::Write;
use std::path::PathBuf;

use crate::error::LaunchError;
use crate::picker::pick_client_file;
use crate::prompt::{CountPrompt, NativeCountDialog};

/// The two questions asked before launching.
pub trait Dialogs {
    /// Pick the executable. `None` means the picker was cancelled.
    fn pick_file(&mut self) -> Result<Option<PathBuf>, LaunchError>;

    /// Ask for the number of copies. `None` means the prompt was cancelled.
    fn ask_count(&mut self) -> Result<Option<i64>, LaunchError>;
}

/// Native file picker plus the native count input box.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, LaunchError> {
        pick_client_file()
    }

    fn ask_count(&mut self) -> Result<Option<i64>, LaunchError> {
        Ok(CountPrompt::new(NativeCountDialog).ask())
    }
}

/// Answers fixed up front (from CLI flags), falling back to `inner` for the rest.
#[derive(Debug)]
pub struct Preset<D> {
    pub file: Option<PathBuf>,
    pub count: Option<i64>,
    pub inner: D,
}

impl<D: Dialogs> Dialogs for Preset<D> {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, LaunchError> {
        match self.file.take() {
            Some(path) => Ok(Some(path)),
            None => self.inner.pick_file(),
        }
    }

    fn ask_count(&mut self) -> Result<Option<i64>, LaunchError> {
        match self.count.take() {
            Some(n) => Ok(Some(n)),
            None => self.inner.ask_count(),
        }
    }
}

/// What the user chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Empty when the picker was cancelled.
    pub path: PathBuf,
    /// `None` when the count prompt was cancelled.
    pub count: Option<i64>,
}

/// Owner of the interactive context for the duration of the two questions.
pub struct DialogSession<D> {
    dialogs: D,
}

impl<D: Dialogs> DialogSession<D> {
    pub fn open(dialogs: D) -> Self {
        Self { dialogs }
    }

    /// Ask both questions and echo each answer to `out` as soon as it is known.
    ///
    /// A cancelled count is echoed as `None` and still returned; deciding what
    /// to do with it is up to the caller.
    pub fn collect<W: Write>(mut self, out: &mut W) -> Result<Selection, LaunchError> {
        let path = self.dialogs.pick_file()?.unwrap_or_default();
        writeln!(out, "{}", path.display())?;

        let count = self.dialogs.ask_count()?;
        match count {
            Some(n) => writeln!(out, "{}", n)?,
            None => writeln!(out, "None")?,
        }
        out.flush()?;

        Ok(Selection { path, count })
    }
}
