//! Variable substitution interface

/// Trait for expanding `$VAR`-style macros in configuration values
pub trait MacroExpander: Send + Sync {
    fn expand(&self, value: &str) -> String;
}
