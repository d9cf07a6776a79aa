use std::{fmt, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde_json::Value;

use super::EnvironmentFiles;

/// Environment names in order of first appearance, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentNames {
    names: Vec<String>,
}

impl EnvironmentNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<S: Into<String>> FromIterator<S> for EnvironmentNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

impl fmt::Display for EnvironmentNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

/// Collects names from every present environment file, public first.
/// A file that cannot be read or is not a JSON object contributes nothing.
pub fn extract_environment_names(directory: &Path, files: &EnvironmentFiles) -> EnvironmentNames {
    let mut names = EnvironmentNames::new();
    for file_name in files.present() {
        let path = directory.join(file_name);
        match read_environment_names(&path) {
            Ok(found) => names.extend(found),
            Err(err) => {
                tracing::debug!(file = %path.display(), error = %format!("{err:#}"), "ignoring environment file");
            }
        }
    }
    names
}

/// Top-level keys of a JSON object file, in document order.
pub fn read_environment_names(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading environment file {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing environment file {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
        _ => bail!(
            "environment file {} is not a JSON object",
            path.display()
        ),
    }
}
