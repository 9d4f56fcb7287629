//! nunit-runner - Drive the NUnit console runner from a declarative step config
//!
//! This crate provides functionality to:
//! - Turn a step configuration into the exact NUnit console argument list
//! - Launch the runner directly or through a temporary batch script
//! - Stream the runner output to a log sink while capturing the coverage file
//! - Classify the run as success, unstable or failed
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod runner;
pub mod scanner;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{ArgumentBuilder, LaunchTarget, NUnitCommand, PlatformLauncher};
pub use config::{RunConfig, StepConfig, ToolInstallation};
pub use interfaces::{FileMatcher, LogSink, MacroExpander, ToolResolver};
pub use runner::{NUnitRunner, RunReport, COVERAGE_ENV};
pub use scanner::OutputScanner;
