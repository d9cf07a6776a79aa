mod loader;

pub use loader::{load_config, LoadedConfig, RunnerConfig, CONFIG_FILE_NAME};
