#[cfg(feature = "cli")]
mod launcher;
#[cfg(feature = "cli")]
mod shell;

use std::path::PathBuf;

use anyhow::Result;

#[cfg(feature = "cli")]
pub use launcher::{LauncherSession, LauncherTerminal};
#[cfg(feature = "cli")]
pub use shell::{ShellSession, ShellTerminal};

pub const DEFAULT_TERMINAL_NAME: &str = "ijhttp Terminal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    pub name: String,
    pub cwd: PathBuf,
}

/// A visible terminal that accepts command text.
pub trait TerminalSession {
    fn show(&mut self) -> Result<()>;
    fn send_text(&mut self, text: &str) -> Result<()>;
}

/// Opens a fresh session for every call; sessions are never reused.
pub trait TerminalFactory {
    fn create_terminal(&mut self, options: TerminalOptions) -> Result<Box<dyn TerminalSession>>;
}
