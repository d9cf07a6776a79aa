use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

pub const CONFIG_FILE_NAME: &str = "ijhttp-runner.json";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    /// Client executable placed first on the command line.
    pub program: Option<String>,
    #[serde(rename = "terminalName")]
    pub terminal_name: Option<String>,
    /// Terminal emulator template with `{cwd}`, `{name}` and `{command}`.
    pub launcher: Option<String>,
    pub shell: Option<String>,
    #[serde(rename = "activeFileVariables")]
    pub active_file_variables: Option<Vec<String>>,
    #[serde(flatten)]
    pub extras: HashMap<String, Value>,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RunnerConfig,
    pub path: PathBuf,
    pub dir: PathBuf,
}

impl LoadedConfig {
    /// Settings with a relative `shell` path (e.g. `scripts/run.sh`) anchored
    /// at the directory holding the config file. Bare program names stay as
    /// they are and are looked up on `PATH`.
    pub fn into_config(self) -> RunnerConfig {
        let mut config = self.config;
        if let Some(shell) = config.shell.take() {
            config.shell = Some(resolve_against(&self.dir, shell));
        }
        tracing::debug!(path = %self.path.display(), "loaded configuration");
        config
    }
}

fn resolve_against(dir: &Path, value: String) -> String {
    let candidate = Path::new(&value);
    if candidate.is_absolute() || candidate.components().count() < 2 {
        value
    } else {
        dir.join(candidate).to_string_lossy().into_owned()
    }
}

/// Loads `ijhttp-runner.json` from `target`, which may be the file itself or
/// the directory holding it. A missing file is not an error.
pub fn load_config(target: &Path) -> Result<Option<LoadedConfig>> {
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        std::env::current_dir()?.join(target)
    };

    let (file_path, dir) = if resolved.is_dir() {
        (resolved.join(CONFIG_FILE_NAME), resolved)
    } else {
        let dir = resolved
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| resolved.clone());
        (resolved, dir)
    };

    if !file_path.exists() {
        tracing::debug!(path = %file_path.display(), "no configuration file");
        return Ok(None);
    }

    let contents = fs::read_to_string(&file_path)
        .with_context(|| format!("reading config {}", file_path.display()))?;

    let config: RunnerConfig = serde_json::from_str(&contents)
        .with_context(|| format!("parsing config {}", file_path.display()))?;

    if !config.extras.is_empty() {
        let keys: Vec<_> = config.extras.keys().collect();
        tracing::warn!(path = %file_path.display(), ?keys, "unknown configuration keys");
    }

    Ok(Some(LoadedConfig {
        config,
        path: file_path,
        dir,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn returns_none_when_config_missing() -> Result<()> {
        let temp = tempdir()?;
        let result = load_config(temp.path())?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn loads_config_from_directory() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"{
  "program": "/opt/ijhttp/ijhttp",
  "terminalName": "HTTP",
  "launcher": "kitty --directory {cwd} sh -c {command}",
  "activeFileVariables": ["ZED_FILE", "IJHTTP_ACTIVE_FILE"]
}"#,
        )?;

        let result = load_config(temp.path())?.expect("config should load");
        assert_eq!(result.path, config_path);
        assert_eq!(result.dir, temp.path());
        assert_eq!(result.config.program.as_deref(), Some("/opt/ijhttp/ijhttp"));
        assert_eq!(result.config.terminal_name.as_deref(), Some("HTTP"));
        assert_eq!(
            result.config.active_file_variables,
            Some(vec!["ZED_FILE".to_string(), "IJHTTP_ACTIVE_FILE".to_string()])
        );
        assert_eq!(result.config.shell, None);
        Ok(())
    }

    #[test]
    fn loads_explicit_file_and_keeps_unknown_keys() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join("custom.json");
        fs::write(&config_path, r#"{"shell":"/bin/zsh","theme":"dark"}"#)?;

        let result = load_config(&config_path)?.expect("config should load");
        assert_eq!(result.dir, temp.path());
        assert_eq!(result.config.shell.as_deref(), Some("/bin/zsh"));
        assert!(result.config.extras.contains_key("theme"));
        Ok(())
    }

    #[test]
    fn relative_shell_is_anchored_at_config_directory() -> Result<()> {
        let temp = tempdir()?;
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"{"shell":"scripts/run.sh"}"#,
        )?;

        let config = load_config(temp.path())?.expect("config should load").into_config();
        let expected = temp.path().join("scripts/run.sh");
        assert_eq!(config.shell.as_deref(), expected.to_str());
        Ok(())
    }

    #[test]
    fn bare_and_absolute_shells_are_kept() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(CONFIG_FILE_NAME), r#"{"shell":"zsh"}"#)?;
        let config = load_config(temp.path())?.expect("config should load").into_config();
        assert_eq!(config.shell.as_deref(), Some("zsh"));

        fs::write(temp.path().join(CONFIG_FILE_NAME), r#"{"shell":"/bin/zsh"}"#)?;
        let config = load_config(temp.path())?.expect("config should load").into_config();
        assert_eq!(config.shell.as_deref(), Some("/bin/zsh"));
        Ok(())
    }

    #[test]
    fn invalid_config_is_reported() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(CONFIG_FILE_NAME), "{ nope")?;

        let err = load_config(temp.path()).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
        Ok(())
    }
}
