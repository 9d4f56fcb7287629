//! Capabilities the runner receives from its host
//!
//! Tool lookup, workspace globbing, macro expansion and the build log are
//! owned by whatever embeds the runner. They are handed to
//! [`NUnitRunner`](crate::runner::NUnitRunner) at construction time instead
//! of being looked up from global state.

pub mod file_matcher;
pub mod log_sink;
pub mod macro_expander;
pub mod tool_resolver;

pub use file_matcher::FileMatcher;
pub use log_sink::LogSink;
pub use macro_expander::MacroExpander;
pub use tool_resolver::ToolResolver;
