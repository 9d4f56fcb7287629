//! Resolved, immutable input of one runner invocation

use crate::types::{Framework, Platform};
use crate::utils::fix_empty_and_trim;
use std::collections::BTreeSet;

/// Everything the argument builder needs, after tool and file resolution.
///
/// Optional strings are never blank: the `with_*` setters trim their input
/// and drop empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    executable: String,
    test_files: BTreeSet<String>,
    settings: Option<String>,
    tests: Option<String>,
    test_case_filter: Option<String>,
    platform: Option<Platform>,
    framework: Option<Framework>,
    enable_code_coverage: bool,
    cmd_line_args: Option<String>,
    fail_build: bool,
}

impl RunConfig {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            test_files: BTreeSet::new(),
            settings: None,
            tests: None,
            test_case_filter: None,
            platform: None,
            framework: None,
            enable_code_coverage: false,
            cmd_line_args: None,
            fail_build: true,
        }
    }

    /// Add already relativized and quoted test-file arguments
    pub fn with_test_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_settings(mut self, settings: Option<&str>) -> Self {
        self.settings = fix_empty_and_trim(settings);
        self
    }

    pub fn with_tests(mut self, tests: Option<&str>) -> Self {
        self.tests = fix_empty_and_trim(tests);
        self
    }

    pub fn with_test_case_filter(mut self, filter: Option<&str>) -> Self {
        self.test_case_filter = fix_empty_and_trim(filter);
        self
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_framework(mut self, framework: Option<Framework>) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_code_coverage(mut self, enabled: bool) -> Self {
        self.enable_code_coverage = enabled;
        self
    }

    pub fn with_cmd_line_args(mut self, args: Option<&str>) -> Self {
        self.cmd_line_args = fix_empty_and_trim(args);
        self
    }

    pub fn with_fail_build(mut self, fail_build: bool) -> Self {
        self.fail_build = fail_build;
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn test_files(&self) -> &BTreeSet<String> {
        &self.test_files
    }

    pub fn settings(&self) -> Option<&str> {
        self.settings.as_deref()
    }

    pub fn tests(&self) -> Option<&str> {
        self.tests.as_deref()
    }

    pub fn test_case_filter(&self) -> Option<&str> {
        self.test_case_filter.as_deref()
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }

    pub fn enable_code_coverage(&self) -> bool {
        self.enable_code_coverage
    }

    pub fn cmd_line_args(&self) -> Option<&str> {
        self.cmd_line_args.as_deref()
    }

    pub fn fail_build(&self) -> bool {
        self.fail_build
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_become_absent() {
        let config = RunConfig::new("nunit3-console.exe")
            .with_settings(Some("   "))
            .with_tests(Some(""))
            .with_test_case_filter(Some(" Priority=1 "))
            .with_cmd_line_args(None);

        assert_eq!(config.settings(), None);
        assert_eq!(config.tests(), None);
        assert_eq!(config.test_case_filter(), Some("Priority=1"));
        assert_eq!(config.cmd_line_args(), None);
    }

    #[test]
    fn test_test_files_are_deduplicated() {
        let config = RunConfig::new("nunit")
            .with_test_files(["\"b.dll\"", "\"a.dll\""])
            .with_test_files(["\"a.dll\""]);
        assert_eq!(config.test_files().len(), 2);
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("nunit");
        assert!(config.fail_build());
        assert!(!config.enable_code_coverage());
        assert!(config.test_files().is_empty());
    }
}
