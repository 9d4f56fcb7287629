//! Console runner argument construction

use crate::{
    config::RunConfig,
    interfaces::{FileMatcher, MacroExpander},
    utils::{relativize, split_patterns},
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Turns a [`RunConfig`] into the ordered console runner argument list.
///
/// Group order is fixed: executable, test files, `/Settings`, `/Tests`,
/// `/TestCaseFilter`, `/Enablecodecoverage`, `/Platform`, `/Framework`,
/// then the raw trailing arguments.
pub struct ArgumentBuilder<'a> {
    expander: &'a dyn MacroExpander,
}

impl<'a> ArgumentBuilder<'a> {
    pub fn new(expander: &'a dyn MacroExpander) -> Self {
        Self { expander }
    }

    pub fn build(&self, config: &RunConfig) -> Vec<String> {
        let mut args = vec![config.executable().to_string()];

        args.extend(config.test_files().iter().cloned());

        // Run tests with additional settings such as data collectors
        if let Some(settings) = config.settings() {
            args.push(quoted_option("Settings", &self.expander.expand(settings)));
        }

        if let Some(tests) = config.tests() {
            args.push(option("Tests", &self.expander.expand(tests)));
        }

        if let Some(filter) = config.test_case_filter() {
            args.push(quoted_option("TestCaseFilter", &self.expander.expand(filter)));
        }

        if config.enable_code_coverage() {
            args.push("/Enablecodecoverage".to_string());
        }

        if let Some(platform) = config.platform() {
            args.push(option("Platform", platform.as_str()));
        }

        if let Some(framework) = config.framework() {
            args.push(option("Framework", framework.as_str()));
        }

        // Passed through untouched; quoting is up to whoever wrote it
        if let Some(raw) = config.cmd_line_args() {
            args.push(self.expander.expand(raw));
        }

        debug!("Built {} console arguments", args.len());
        args
    }
}

/// Resolve whitespace-separated patterns into quoted, workspace-relative
/// file arguments.
///
/// A pattern the matcher cannot evaluate contributes nothing.
pub fn resolve_test_files(
    patterns: &str,
    workspace: &Path,
    matcher: &dyn FileMatcher,
    expander: &dyn MacroExpander,
) -> BTreeSet<String> {
    let mut files = BTreeSet::new();

    for token in split_patterns(patterns) {
        let pattern = expander.expand(token);
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        match matcher.matches(pattern, workspace) {
            Ok(paths) => {
                for path in paths {
                    files.insert(quote(&relativize(workspace, &path)));
                }
            }
            Err(e) => debug!("Ignoring pattern {}: {}", pattern, e),
        }
    }

    files
}

fn option(name: &str, value: &str) -> String {
    format!("/{name}:{value}")
}

fn quoted_option(name: &str, value: &str) -> String {
    format!("/{name}:\"{value}\"")
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
