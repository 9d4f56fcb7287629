pub mod outcome;
pub mod selector;

// Re-export commonly used types
pub use outcome::RunOutcome;
pub use selector::{Framework, Platform};
