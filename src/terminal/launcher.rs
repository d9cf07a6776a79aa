use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{bail, Context, Result};

use super::{TerminalFactory, TerminalOptions, TerminalSession};

/// Opens a terminal emulator from a command template such as
/// `kitty --directory {cwd} --title {name} sh -c {command}`.
#[derive(Debug, Clone)]
pub struct LauncherTerminal {
    template: String,
}

impl LauncherTerminal {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl TerminalFactory for LauncherTerminal {
    fn create_terminal(&mut self, options: TerminalOptions) -> Result<Box<dyn TerminalSession>> {
        let tokens = shell_words::split(&self.template)
            .with_context(|| format!("parsing launcher template `{}`", self.template))?;
        if tokens.is_empty() {
            bail!("launcher template is empty");
        }
        if !tokens.iter().any(|token| token.contains("{command}")) {
            bail!("launcher template `{}` has no {{command}} placeholder", self.template);
        }
        Ok(Box::new(LauncherSession {
            tokens,
            name: options.name,
            cwd: options.cwd,
        }))
    }
}

/// A terminal emulator window. It does not exist until `send_text` spawns
/// the launcher with the command line.
#[derive(Debug)]
pub struct LauncherSession {
    tokens: Vec<String>,
    name: String,
    cwd: PathBuf,
}

impl LauncherSession {
    fn render(&self, text: &str) -> Vec<String> {
        let cwd = self.cwd.to_string_lossy();
        self.tokens
            .iter()
            .map(|token| {
                token
                    .replace("{cwd}", &cwd)
                    .replace("{name}", &self.name)
                    .replace("{command}", text)
            })
            .collect()
    }
}

impl TerminalSession for LauncherSession {
    /// Nothing to raise yet: the window is created by `send_text`.
    fn show(&mut self) -> Result<()> {
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        let mut argv = self.render(text);
        let program = argv.remove(0);
        tracing::debug!(%program, args = ?argv, "launching terminal");
        Command::new(&program)
            .args(&argv)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn terminal launcher {program}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> TerminalOptions {
        TerminalOptions {
            name: "ijhttp Terminal".to_string(),
            cwd: PathBuf::from("/work/api"),
        }
    }

    fn session(template: &str) -> Result<LauncherSession> {
        let tokens = shell_words::split(template)?;
        let options = options();
        Ok(LauncherSession {
            tokens,
            name: options.name,
            cwd: options.cwd,
        })
    }

    #[test]
    fn substitutes_placeholders_per_token() -> Result<()> {
        let session = session("kitty --directory {cwd} --title '{name}' sh -c {command}")?;
        let argv = session.render(r#"ijhttp --env dev "test.http""#);
        assert_eq!(
            argv,
            vec![
                "kitty",
                "--directory",
                "/work/api",
                "--title",
                "ijhttp Terminal",
                "sh",
                "-c",
                r#"ijhttp --env dev "test.http""#,
            ]
        );
        Ok(())
    }

    #[test]
    fn show_does_not_spawn_anything() -> Result<()> {
        let mut session = session("definitely-not-a-terminal-binary {command}")?;
        session.show()?;
        let err = session.send_text("ijhttp \"test.http\"").unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-terminal-binary"));
        Ok(())
    }

    #[test]
    fn rejects_template_without_command_placeholder() {
        let mut factory = LauncherTerminal::new("alacritty --working-directory {cwd}");
        let err = factory.create_terminal(options()).err().expect("template should be rejected");
        assert!(err.to_string().contains("{command}"));
    }

    #[test]
    fn rejects_empty_template() {
        let mut factory = LauncherTerminal::new("   ");
        assert!(factory.create_terminal(options()).is_err());
    }

    #[test]
    fn reports_unbalanced_quotes() {
        let mut factory = LauncherTerminal::new("kitty 'sh -c {command}");
        let err = factory.create_terminal(options()).err().expect("template should be rejected");
        assert!(err.to_string().contains("parsing launcher template"));
    }
}
