use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nunit_runner_core::{LaunchTarget, config::StepOverrides};
use std::path::PathBuf;

use crate::commands::{init_command, platforms_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "nunit-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the NUnit console for a build step
    #[command(visible_alias = "r")]
    Run(RunArgs),
    /// Write a starter .nunit-runner.json
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,

        /// Executable of the default installation
        #[arg(long)]
        nunit_home: Option<String>,
    },
    /// List accepted platform and framework selectors
    Platforms,
}

/// Shell flavour the console is launched through
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
    Posix,
    Windows,
}

impl From<ShellKind> for LaunchTarget {
    fn from(kind: ShellKind) -> Self {
        match kind {
            ShellKind::Posix => LaunchTarget::Posix,
            ShellKind::Windows => LaunchTarget::Windows,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Workspace the tests run in (defaults to current directory)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Step config file (defaults to the nearest .nunit-runner.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the NUnit installation to use
    #[arg(long = "nunit")]
    pub nunit_name: Option<String>,

    /// Whitespace-separated glob patterns of test assemblies
    #[arg(long)]
    pub test_files: Option<String>,

    /// Run settings file
    #[arg(long)]
    pub settings: Option<String>,

    /// Run tests with names that match the provided values
    #[arg(long)]
    pub tests: Option<String>,

    /// Run tests that match the given expression
    #[arg(long)]
    pub test_case_filter: Option<String>,

    /// Target platform architecture (ARM, x86, x64)
    #[arg(long)]
    pub platform: Option<String>,

    /// Target .NET Framework version (framework35, framework40, framework45)
    #[arg(long)]
    pub framework: Option<String>,

    /// Extra arguments appended verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub cmd_line_args: Option<String>,

    /// Enable the code coverage data collector
    #[arg(long)]
    pub enable_code_coverage: bool,

    /// Mark non-zero exits and unmatched patterns as unstable instead of failed
    #[arg(long)]
    pub no_fail_build: bool,

    /// Launch strategy (defaults to the host's)
    #[arg(long, value_enum)]
    pub shell: Option<ShellKind>,

    /// Print the command without executing it
    #[arg(short, long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Flags that override the loaded step config
    pub fn overrides(&self) -> StepOverrides {
        StepOverrides {
            nunit_name: self.nunit_name.clone(),
            test_files: self.test_files.clone(),
            settings: self.settings.clone(),
            tests: self.tests.clone(),
            test_case_filter: self.test_case_filter.clone(),
            platform: self.platform.clone(),
            framework: self.framework.clone(),
            cmd_line_args: self.cmd_line_args.clone(),
            enable_code_coverage: self.enable_code_coverage.then_some(true),
            fail_build: self.no_fail_build.then_some(false),
        }
    }
}

impl Commands {
    /// Execute the command, returning the process exit code
    pub fn execute(self) -> Result<i32> {
        match self {
            Commands::Run(args) => run_command(args),
            Commands::Init {
                cwd,
                force,
                nunit_home,
            } => init_command(cwd.as_deref(), force, nunit_home.as_deref()).map(|_| 0),
            Commands::Platforms => {
                platforms_command();
                Ok(0)
            }
        }
    }
}
