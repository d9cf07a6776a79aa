pub mod command;
pub mod config;
pub mod dispatcher;
pub mod env;
#[cfg(feature = "cli")]
pub mod interactive;
#[cfg(feature = "cli")]
pub mod logging;
pub mod target;
pub mod terminal;
