//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the command handlers.

pub mod app;
pub mod args;
pub mod capture_cmd;
pub mod config_cmd;
pub mod job_cmd;
pub mod parts_cmd;
pub mod photo_cmd;
pub mod presenter;
pub mod settings_cmd;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, JobAction, PartAction, PhotoAction, SettingsAction};
pub use presenter::Presenter;
