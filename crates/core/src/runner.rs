//! Main runner that coordinates resolution, launch and classification

use crate::{
    command::{resolve_test_files, ArgumentBuilder, LaunchTarget, NUnitCommand, PlatformLauncher},
    config::{RunConfig, StepConfig},
    error::{Error, Result},
    interfaces::{FileMatcher, LogSink, MacroExpander, ToolResolver},
    scanner::OutputScanner,
    types::RunOutcome,
    utils::relativize,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Variable under which the captured coverage file is published
pub const COVERAGE_ENV: &str = "NUNIT_RESULT_COVERAGE";

/// Result of one runner invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Coverage file relative to the workspace, if the runner reported one
    pub coverage_file: Option<String>,
}

impl RunReport {
    /// Variables to hand to later build steps
    pub fn env_vars(&self) -> Vec<(String, String)> {
        self.coverage_file
            .iter()
            .map(|path| (COVERAGE_ENV.to_string(), path.clone()))
            .collect()
    }
}

pub struct NUnitRunner {
    resolver: Arc<dyn ToolResolver>,
    matcher: Arc<dyn FileMatcher>,
    expander: Arc<dyn MacroExpander>,
    log: Arc<dyn LogSink>,
    target: LaunchTarget,
    env: Vec<(String, String)>,
}

impl NUnitRunner {
    pub fn new(
        resolver: Arc<dyn ToolResolver>,
        matcher: Arc<dyn FileMatcher>,
        expander: Arc<dyn MacroExpander>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            resolver,
            matcher,
            expander,
            log,
            target: LaunchTarget::host(),
            env: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: LaunchTarget) -> Self {
        self.target = target;
        self
    }

    /// Extra environment for the child process
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Resolve the executable and test files of `step`.
    ///
    /// Fails with [`Error::NoFilesMatched`] when the test-file patterns
    /// matched nothing and the step fails the build on errors.
    pub fn prepare(&self, step: &StepConfig, workspace: &Path) -> Result<RunConfig> {
        let executable = self
            .resolver
            .resolve(step.nunit_name.as_deref(), self.log.as_ref());
        self.log.println(&format!("Path To NUnit: {executable}"));

        let mut config = RunConfig::new(executable);

        if let Some(ref patterns) = step.test_files {
            let files = resolve_test_files(
                patterns,
                workspace,
                self.matcher.as_ref(),
                self.expander.as_ref(),
            );
            if files.is_empty() {
                let err = Error::NoFilesMatched {
                    pattern: patterns.clone(),
                };
                self.log.println(&err.to_string());
                if step.fail_build {
                    error!("{err}");
                    return Err(err);
                }
                warn!("{err}; continuing without test files");
            }
            config = config.with_test_files(files);
        }

        let report = |e: &Error| {
            self.log.println(&e.to_string());
            error!("{e}");
        };
        let platform = step.platform(self.expander.as_ref()).inspect_err(report)?;
        let framework = step.framework(self.expander.as_ref()).inspect_err(report)?;

        Ok(config
            .with_settings(step.settings.as_deref())
            .with_tests(step.tests.as_deref())
            .with_test_case_filter(step.test_case_filter.as_deref())
            .with_code_coverage(step.enable_code_coverage)
            .with_platform(platform)
            .with_framework(framework)
            .with_cmd_line_args(step.cmd_line_args.as_deref())
            .with_fail_build(step.fail_build))
    }

    /// Console runner argument list for a prepared config
    pub fn arguments(&self, config: &RunConfig) -> Vec<String> {
        ArgumentBuilder::new(self.expander.as_ref()).build(config)
    }

    /// Resolve, launch, stream and classify one step
    pub fn run(&self, step: &StepConfig, workspace: &Path) -> Result<RunReport> {
        let config = self.prepare(step, workspace)?;
        let args = self.arguments(&config);
        self.execute(&args, config.fail_build(), workspace)
    }

    /// Launch an already built argument list in `workspace`
    pub fn execute(&self, args: &[String], fail_build: bool, workspace: &Path) -> Result<RunReport> {
        let launch = PlatformLauncher::prepare(args, self.target, workspace).inspect_err(|e| {
            self.log.println(&e.to_string());
            error!("{e}");
        })?;

        let mut command = NUnitCommand::new(launch.argv).with_working_dir(workspace);
        for (key, value) in &self.env {
            command = command.with_env(key.clone(), value.clone());
        }

        let shell_cmd = command.to_shell_command();
        self.log.println(&format!("Executing NUnit: {shell_cmd}"));
        info!("Running: {}", shell_cmd);

        let mut scanner = OutputScanner::new(self.log.as_ref());
        let status = command.execute(&mut scanner, self.log.as_ref());
        let coverage_file = scanner
            .into_coverage_file()
            .map(|path| relativize(workspace, Path::new(&path)));

        if let Some(script) = launch.script {
            if let Err(e) = script.cleanup() {
                self.log
                    .println(&format!("temporary file delete failed: {e}"));
                warn!("Failed to delete launch script: {e}");
            }
        }

        let status = status.map_err(|source| {
            self.log
                .println(&format!("NUnit command execution failed: {source}"));
            error!("Failed to execute: {shell_cmd}: {source}");
            Error::Launch {
                command: shell_cmd.clone(),
                source,
            }
        })?;

        // Killed by a signal: no code, still a non-zero exit
        let exit_code = status.code().unwrap_or(-1);
        let outcome = RunOutcome::classify(exit_code, fail_build);
        match &outcome {
            RunOutcome::Success => debug!("NUnit finished successfully"),
            RunOutcome::Unstable { exit_code } => {
                self.log.println(&format!("NUnit exited with {exit_code}"));
                warn!("NUnit exited with {exit_code}; marking run unstable");
            }
            RunOutcome::Failed { reason, .. } => {
                self.log.println(reason);
                error!("{reason}");
            }
        }

        if let Some(ref path) = coverage_file {
            info!("Coverage file: {}", path);
        }

        Ok(RunReport {
            outcome,
            coverage_file,
        })
    }
}
