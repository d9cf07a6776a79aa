use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dispatcher::EditorUi;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("No active file is open")]
    NoActiveFile,
    #[error("{0} does not name a file")]
    NoFileName(PathBuf),
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(String),
}

/// The request file chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTarget {
    pub source_path: PathBuf,
    pub directory: PathBuf,
    pub file_name: String,
}

impl ExecutionTarget {
    pub fn from_path(path: &Path) -> Result<Self, TargetError> {
        let source_path = resolve_path(path)?;
        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| TargetError::NoFileName(source_path.clone()))?;
        let directory = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| source_path.clone());

        Ok(Self {
            source_path,
            directory,
            file_name,
        })
    }
}

/// Uses the explicit reference when given, otherwise the active document.
pub fn resolve_execution_target(
    explicit: Option<&Path>,
    ui: &dyn EditorUi,
) -> Result<ExecutionTarget, TargetError> {
    if let Some(path) = explicit {
        return ExecutionTarget::from_path(path);
    }

    let active = ui.active_document().ok_or(TargetError::NoActiveFile)?;
    ExecutionTarget::from_path(&active)
}

fn resolve_path(path: &Path) -> Result<PathBuf, TargetError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|err| TargetError::CurrentDir(err.to_string()))?;
        Ok(cwd.join(path))
    }
}
