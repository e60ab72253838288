//! Modal integer dialog for the client count.
//!
//! The question is shown with a native input box. An entry that is not an
//! integer (an empty field included) brings up an "Illegal value" warning and
//! the question is asked again. Only dismissing the dialog cancels.

use tinyfiledialogs::{MessageBoxIcon, input_box, message_box_ok};

pub const COUNT_LABEL: &str = "How many clients?";
pub const ILLEGAL_VALUE_TITLE: &str = "Illegal value";
pub const ILLEGAL_VALUE_MESSAGE: &str = "Not an integer.\nPlease try again";

/// Result of interpreting one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Count(i64),
    Invalid,
}

/// Interpret a single entry from the input box.
///
/// Surrounding whitespace is ignored and an optional sign is accepted. No
/// range check is applied beyond what fits in an `i64`.
pub fn parse_answer(entry: &str) -> Answer {
    match entry.trim().parse::<i64>() {
        Ok(n) => Answer::Count(n),
        Err(_) => Answer::Invalid,
    }
}

/// Where the raw entries come from.
pub trait CountInput {
    /// Show the question. `None` means the user dismissed it.
    fn read(&mut self) -> Option<String>;

    /// Tell the user `entry` was not accepted.
    fn reject(&mut self, entry: &str);
}

/// Native input box plus warning box, via `tinyfiledialogs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCountDialog;

impl CountInput for NativeCountDialog {
    fn read(&mut self) -> Option<String> {
        input_box(COUNT_LABEL, COUNT_LABEL, "")
    }

    fn reject(&mut self, _entry: &str) {
        message_box_ok(ILLEGAL_VALUE_TITLE, ILLEGAL_VALUE_MESSAGE, MessageBoxIcon::Warning);
    }
}

/// The "How many clients?" question over some `CountInput`.
pub struct CountPrompt<I> {
    input: I,
}

impl<I: CountInput> CountPrompt<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Ask until an integer is entered or the dialog is dismissed.
    pub fn ask(&mut self) -> Option<i64> {
        loop {
            let entry = self.input.read()?;
            match parse_answer(&entry) {
                Answer::Count(n) => return Some(n),
                Answer::Invalid => {
                    tracing::debug!(%entry, "rejected client count");
                    self.input.reject(&entry);
                }
            }
        }
    }
}
