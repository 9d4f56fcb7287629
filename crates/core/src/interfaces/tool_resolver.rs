//! Executable lookup interface

use crate::interfaces::LogSink;

/// Trait for turning an optional installation name into an executable path
pub trait ToolResolver: Send + Sync {
    /// Resolve `name` to the console runner executable.
    ///
    /// Resolution never fails: unknown names fall back to a default, which
    /// implementations may report on `log`.
    fn resolve(&self, name: Option<&str>, log: &dyn LogSink) -> String;
}
