use std::{
    ffi::OsString,
    io::IsTerminal,
    path::PathBuf,
};

use anyhow::{anyhow, Result};
use colored::Colorize;
use inquire::{InquireError, Select};

use crate::dispatcher::EditorUi;

pub const DEFAULT_ACTIVE_FILE_VARIABLE: &str = "IJHTTP_ACTIVE_FILE";

/// Terminal-backed editor surface: the active document comes from variables an
/// editor task exports, prompts are `inquire` menus.
#[derive(Debug, Clone)]
pub struct InquireUi {
    active_file_variables: Vec<String>,
}

impl Default for InquireUi {
    fn default() -> Self {
        Self::new(vec![DEFAULT_ACTIVE_FILE_VARIABLE.to_string()])
    }
}

impl InquireUi {
    pub fn new(active_file_variables: Vec<String>) -> Self {
        Self {
            active_file_variables,
        }
    }
}

impl EditorUi for InquireUi {
    fn active_document(&self) -> Option<PathBuf> {
        active_document_from(&self.active_file_variables, |key| std::env::var_os(key))
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn select(&mut self, title: &str, placeholder: &str, items: &[String]) -> Result<Option<String>> {
        if !std::io::stdin().is_terminal() {
            tracing::debug!(%title, "stdin is not a terminal, treating prompt as dismissed");
            return Ok(None);
        }

        let prompt = Select::new(title, items.to_vec())
            .with_page_size(10)
            .with_help_message(placeholder);
        match prompt.prompt() {
            Ok(choice) => items
                .iter()
                .find(|item| *item == &choice)
                .cloned()
                .map(Some)
                .ok_or_else(|| anyhow!("selection not found")),
            Err(
                InquireError::OperationCanceled
                | InquireError::OperationInterrupted
                | InquireError::NotTTY,
            ) => Ok(None),
            Err(other) => Err(other.into()),
        }
    }
}

fn active_document_from<F>(variables: &[String], lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    variables
        .iter()
        .filter_map(|key| lookup(key.as_str()))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}
