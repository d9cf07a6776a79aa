use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{TerminalFactory, TerminalOptions, TerminalSession};

/// Runs commands in the terminal the runner was started from.
#[derive(Debug, Clone, Default)]
pub struct ShellTerminal {
    shell: Option<String>,
}

impl ShellTerminal {
    pub fn new(shell: Option<String>) -> Self {
        Self { shell }
    }
}

impl TerminalFactory for ShellTerminal {
    fn create_terminal(&mut self, options: TerminalOptions) -> Result<Box<dyn TerminalSession>> {
        let shell = self.shell.clone().unwrap_or_else(default_shell);
        Ok(Box::new(ShellSession::new(options, shell)))
    }
}

#[derive(Debug)]
pub struct ShellSession {
    name: String,
    cwd: PathBuf,
    shell: String,
}

impl ShellSession {
    fn new(options: TerminalOptions, shell: String) -> Self {
        Self {
            name: options.name,
            cwd: options.cwd,
            shell,
        }
    }
}

impl TerminalSession for ShellSession {
    fn show(&mut self) -> Result<()> {
        eprintln!(
            "{} {}",
            format!("── {} ──", self.name).bold(),
            self.cwd.display().to_string().dimmed()
        );
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        eprintln!("{} {}", "$".dimmed(), text.cyan());
        let status = shell_command(&self.shell, text, &self.cwd)
            .status()
            .with_context(|| format!("running `{text}` with {}", self.shell))?;
        tracing::debug!(terminal = %self.name, %status, "command finished");
        Ok(())
    }
}

fn shell_command(shell: &str, text: &str, cwd: &Path) -> Command {
    let mut command = Command::new(shell);
    if is_cmd_exe(shell) {
        command.arg("/C");
    } else {
        command.arg("-c");
    }
    command.arg(text).current_dir(cwd);
    command
}

fn is_cmd_exe(shell: &str) -> bool {
    Path::new(shell)
        .file_stem()
        .map(|stem| stem.eq_ignore_ascii_case("cmd"))
        .unwrap_or(false)
}

#[cfg(windows)]
fn default_shell() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

#[cfg(not(windows))]
fn default_shell() -> String {
    std::env::var("SHELL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "sh".to_string())
}
