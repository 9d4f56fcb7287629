//! Configuration management for nunit-runner

pub mod installation;
pub mod run_config;
mod settings;

// Re-export main types
pub use installation::{default_installation, select_installation, ToolInstallation};
pub use run_config::RunConfig;
pub use settings::{StepConfig, StepOverrides, CONFIG_FILE_NAME};
