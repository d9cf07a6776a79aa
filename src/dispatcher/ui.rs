use std::path::PathBuf;

use anyhow::Result;

/// The editor-facing surface the dispatcher talks to.
pub trait EditorUi {
    /// The document currently focused by the user, if any.
    fn active_document(&self) -> Option<PathBuf>;

    fn show_error(&mut self, message: &str);

    /// Single-choice prompt. `Ok(None)` means the user dismissed it.
    fn select(&mut self, title: &str, placeholder: &str, items: &[String]) -> Result<Option<String>>;
}
