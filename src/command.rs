use std::fmt;

use crate::env::EnvironmentFiles;

pub const DEFAULT_PROGRAM: &str = "ijhttp";

/// Shell tokens of a single client invocation, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn to_line(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Builds the client invocation.
///
/// Flags follow a fixed order: env file, private env file, environment name,
/// then the request file. `--env` is only emitted when `environments_available`
/// is set and a name was resolved. File names are double-quoted and otherwise
/// passed through untouched.
pub fn build_command(
    program: &str,
    file_name: &str,
    files: &EnvironmentFiles,
    environment: Option<&str>,
    environments_available: bool,
) -> Command {
    let mut tokens = vec![program.to_string()];

    if let Some(public) = files.public {
        tokens.push(format!("--env-file {}", quote(public)));
    }

    if let Some(private) = files.private {
        tokens.push(format!("--private-env-file {}", quote(private)));
    }

    if let Some(name) = environment.filter(|_| environments_available) {
        tokens.push(format!("--env {name}"));
    }

    tokens.push(quote(file_name));

    Command { tokens }
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
