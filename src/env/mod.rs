mod discovery;
mod names;
mod selection;

pub use discovery::{find_environment_files, EnvironmentFiles};
pub use names::{extract_environment_names, read_environment_names, EnvironmentNames};
pub use selection::{resolve_environment, SELECT_ENVIRONMENT_PLACEHOLDER, SELECT_ENVIRONMENT_TITLE};

/// Shared, checked-in environment definitions.
pub const ENV_FILE_NAME: &str = "http-client.env.json";

/// Local overrides and secrets.
pub const PRIVATE_ENV_FILE_NAME: &str = "http-client.private.env.json";
