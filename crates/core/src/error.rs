use std::io;

/// Errors that can occur during nunit-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no files matching the pattern {pattern}")]
    NoFilesMatched { pattern: String },

    #[error("NUnit command execution failed: {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create temporary script: {0}")]
    TempScript(#[source] io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown {kind} selector: {value}")]
    InvalidSelector { kind: &'static str, value: String },
}

/// Result type alias for nunit-runner operations
pub type Result<T> = std::result::Result<T, Error>;
