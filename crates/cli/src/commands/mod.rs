pub mod init;
pub mod platforms;
pub mod run;

pub use init::init_command;
pub use platforms::platforms_command;
pub use run::run_command;
