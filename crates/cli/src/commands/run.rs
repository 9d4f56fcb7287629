use anyhow::{Context, Result};
use nunit_runner_core::{
    interfaces::{LogSink, MacroExpander},
    services::{EnvMacroExpander, GlobFileMatcher, InstallationResolver, WriterSink},
    utils::simplify_path,
    Error, LaunchTarget, NUnitCommand, NUnitRunner, StepConfig,
};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::cli::RunArgs;
use crate::display::print_report;

pub fn run_command(args: RunArgs) -> Result<i32> {
    let workspace = match args.workspace {
        Some(ref dir) => dir.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let workspace = workspace
        .canonicalize()
        .map(|dir| simplify_path(&dir))
        .with_context(|| format!("Workspace not found: {}", workspace.display()))?;

    let step = load_step(args.config.as_deref(), &workspace)?.merge(args.overrides());
    debug!("Running step {:?} in {}", step, workspace.display());

    let expander: Arc<dyn MacroExpander> = Arc::new(EnvMacroExpander::from_env());
    let log: Arc<dyn LogSink> = Arc::new(WriterSink::stdout());
    let resolver = InstallationResolver::new(step.installations.clone(), Arc::clone(&expander));
    let target = args
        .shell
        .map(LaunchTarget::from)
        .unwrap_or_else(LaunchTarget::host);

    let runner = NUnitRunner::new(
        Arc::new(resolver),
        Arc::new(GlobFileMatcher::new()),
        expander,
        log,
    )
    .with_target(target);

    if args.dry_run {
        let config = match runner.prepare(&step, &workspace) {
            Ok(config) => config,
            Err(e @ Error::NoFilesMatched { .. }) => {
                eprintln!("ERROR: {e}");
                return Ok(1);
            }
            Err(e) => return Err(e).context("Failed to prepare NUnit command"),
        };
        let command = NUnitCommand::new(runner.arguments(&config)).with_working_dir(&workspace);
        println!("{}", command.to_shell_command());
        println!("Working directory: {}", workspace.display());
        return Ok(0);
    }

    match runner.run(&step, &workspace) {
        Ok(report) => {
            print_report(&report);
            if report.outcome.is_failure() {
                Ok(match report.outcome.exit_code() {
                    0 => 1,
                    code => code,
                })
            } else {
                Ok(0)
            }
        }
        Err(e @ Error::NoFilesMatched { .. }) => {
            eprintln!("ERROR: {e}");
            Ok(1)
        }
        Err(e) => Err(e).context("NUnit run failed"),
    }
}

fn load_step(config: Option<&Path>, workspace: &Path) -> Result<StepConfig> {
    let path: Option<PathBuf> = match config {
        Some(path) => Some(path.to_path_buf()),
        None => StepConfig::find_config_file(workspace),
    };

    match path {
        Some(path) => {
            debug!("Loading step config from {}", path.display());
            StepConfig::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(StepConfig::default()),
    }
}
