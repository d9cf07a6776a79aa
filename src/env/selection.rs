use anyhow::Result;

use crate::dispatcher::EditorUi;

use super::EnvironmentNames;

pub const SELECT_ENVIRONMENT_TITLE: &str = "Select environment";
pub const SELECT_ENVIRONMENT_PLACEHOLDER: &str = "dev";

/// Resolves the single environment passed to the client.
///
/// Nothing is asked when no names were discovered. A `preselected` name skips
/// the prompt; a dismissed prompt falls back to the first discovered name.
pub fn resolve_environment(
    names: &EnvironmentNames,
    preselected: Option<&str>,
    ui: &mut dyn EditorUi,
) -> Result<Option<String>> {
    if names.is_empty() {
        if let Some(name) = preselected {
            tracing::warn!(environment = name, "no environments discovered, ignoring --env");
        }
        return Ok(None);
    }

    if let Some(name) = preselected {
        if !names.contains(name) {
            tracing::warn!(environment = name, available = %names, "environment not defined in env files");
        }
        return Ok(Some(name.to_string()));
    }

    let choice = ui.select(
        SELECT_ENVIRONMENT_TITLE,
        SELECT_ENVIRONMENT_PLACEHOLDER,
        names.as_slice(),
    )?;

    Ok(choice.or_else(|| {
        let fallback = names.first().map(str::to_string);
        tracing::debug!(fallback = ?fallback, "environment prompt dismissed");
        fallback
    }))
}
