//! Service implementations for the host capabilities
//!
//! This module provides concrete implementations of the interface traits
//! for running outside of a larger automation host.

pub mod env_macro_expander;
pub mod glob_file_matcher;
pub mod installation_resolver;
pub mod log_sink;

pub use env_macro_expander::{EnvMacroExpander, NoopExpander};
pub use glob_file_matcher::GlobFileMatcher;
pub use installation_resolver::InstallationResolver;
pub use log_sink::{MemorySink, WriterSink};
