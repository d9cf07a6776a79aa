#[cfg(test)]
pub(crate) mod testing;
mod ui;

use std::path::Path;

use anyhow::Result;

use crate::{
    command::{build_command, Command, DEFAULT_PROGRAM},
    env::{
        extract_environment_names, find_environment_files, resolve_environment,
        EnvironmentFiles, EnvironmentNames,
    },
    target::{resolve_execution_target, ExecutionTarget},
    terminal::{TerminalFactory, TerminalOptions, DEFAULT_TERMINAL_NAME},
};

pub use ui::EditorUi;

/// Target and environment files found for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub target: ExecutionTarget,
    pub files: EnvironmentFiles,
    pub environments: EnvironmentNames,
}

/// Everything decided for one invocation, ready to be sent to a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    pub discovery: Discovery,
    pub environment: Option<String>,
    pub command: Command,
}

impl DispatchPlan {
    pub fn target(&self) -> &ExecutionTarget {
        &self.discovery.target
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    program: String,
    terminal_name: String,
    preselected: Option<String>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            terminal_name: DEFAULT_TERMINAL_NAME.to_string(),
            preselected: None,
        }
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_terminal_name(mut self, name: impl Into<String>) -> Self {
        self.terminal_name = name.into();
        self
    }

    pub fn with_environment(mut self, environment: Option<String>) -> Self {
        self.preselected = environment;
        self
    }

    /// Resolves the target and reads its environment files. When no target
    /// can be found the error is shown through `ui` and `None` is returned.
    pub fn discover(&self, explicit: Option<&Path>, ui: &mut dyn EditorUi) -> Option<Discovery> {
        let target = match resolve_execution_target(explicit, &*ui) {
            Ok(target) => target,
            Err(err) => {
                tracing::debug!(error = %err, "no execution target");
                ui.show_error(&err.to_string());
                return None;
            }
        };

        let files = find_environment_files(&target.directory);
        let environments = extract_environment_names(&target.directory, &files);
        tracing::debug!(
            file = %target.source_path.display(),
            environments = %environments,
            "resolved execution target"
        );

        Some(Discovery {
            target,
            files,
            environments,
        })
    }

    /// Decides the environment and builds the command without running it.
    pub fn prepare(&self, explicit: Option<&Path>, ui: &mut dyn EditorUi) -> Result<Option<DispatchPlan>> {
        let Some(discovery) = self.discover(explicit, ui) else {
            return Ok(None);
        };

        let environment =
            resolve_environment(&discovery.environments, self.preselected.as_deref(), ui)?;
        let command = build_command(
            &self.program,
            &discovery.target.file_name,
            &discovery.files,
            environment.as_deref(),
            !discovery.environments.is_empty(),
        );

        Ok(Some(DispatchPlan {
            discovery,
            environment,
            command,
        }))
    }

    /// Runs the whole flow and sends the command to a new terminal session.
    pub fn dispatch(
        &self,
        explicit: Option<&Path>,
        ui: &mut dyn EditorUi,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<Option<DispatchPlan>> {
        let Some(plan) = self.prepare(explicit, ui)? else {
            return Ok(None);
        };

        let mut session = terminals.create_terminal(TerminalOptions {
            name: self.terminal_name.clone(),
            cwd: plan.target().directory.clone(),
        })?;
        session.show()?;
        session.send_text(&plan.command.to_line())?;
        tracing::info!(command = %plan.command, "dispatched");

        Ok(Some(plan))
    }
}
