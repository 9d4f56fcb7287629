pub mod formatter;

pub use formatter::{format_outcome, print_report};
