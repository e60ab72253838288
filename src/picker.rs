//! Native "open file" dialog for choosing the client executable.

use std::path::PathBuf;

use native_dialog::FileDialog;
use tracing::info;

use crate::error::LaunchError;

/// Title of the native "open file" dialog.
pub const PICKER_TITLE: &str = "Select Client File";

/// Show the native open-file dialog and return the chosen path.
///
/// Returns `Ok(None)` when the user cancels. Backend failures (no display
/// server, missing helper such as `zenity`) become `LaunchError::Dialog`
/// with the backend error kept as its source.
/// The selection is not checked for existence or executability.
pub fn pick_client_file() -> Result<Option<PathBuf>, LaunchError> {
    let path = FileDialog::new()
        .set_title(PICKER_TITLE)
        .show_open_single_file()?;
    if let Some(ref path) = path {
        info!(?path, "Selected client file");
    }
    Ok(path)
}
