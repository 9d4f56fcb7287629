pub mod arguments;
pub mod launcher;
pub mod nunit_command;

pub use arguments::{resolve_test_files, ArgumentBuilder};
pub use launcher::{LaunchTarget, PlatformLauncher, PreparedLaunch, ScriptGuard};
pub use nunit_command::NUnitCommand;
