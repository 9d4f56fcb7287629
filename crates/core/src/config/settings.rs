use crate::{
    error::{Error, Result},
    interfaces::MacroExpander,
    types::{Framework, Platform},
    utils::fix_empty_and_trim,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ToolInstallation;

pub const CONFIG_FILE_NAME: &str = ".nunit-runner.json";

/// Declarative configuration of one NUnit build step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct StepConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nunit_name: Option<String>,
    /// Whitespace-separated glob patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_files: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd_line_args: Option<String>,
    pub enable_code_coverage: bool,
    pub fail_build: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub installations: Vec<ToolInstallation>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            nunit_name: None,
            test_files: None,
            settings: None,
            tests: None,
            test_case_filter: None,
            platform: None,
            framework: None,
            cmd_line_args: None,
            enable_code_coverage: false,
            fail_build: true,
            installations: Vec::new(),
        }
    }
}

/// Values supplied on top of a loaded step, e.g. from command-line flags
#[derive(Debug, Clone, Default)]
pub struct StepOverrides {
    pub nunit_name: Option<String>,
    pub test_files: Option<String>,
    pub settings: Option<String>,
    pub tests: Option<String>,
    pub test_case_filter: Option<String>,
    pub platform: Option<String>,
    pub framework: Option<String>,
    pub cmd_line_args: Option<String>,
    pub enable_code_coverage: Option<bool>,
    pub fail_build: Option<bool>,
}

impl StepConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: StepConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config.normalized())
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Trim every string field and drop the blank ones
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.nunit_name,
            &mut self.test_files,
            &mut self.settings,
            &mut self.tests,
            &mut self.test_case_filter,
            &mut self.platform,
            &mut self.framework,
            &mut self.cmd_line_args,
        ] {
            *field = fix_empty_and_trim(field.as_deref());
        }
        self
    }

    /// Apply overrides; any value present in `overrides` wins
    pub fn merge(mut self, overrides: StepOverrides) -> Self {
        overlay(&mut self.nunit_name, overrides.nunit_name);
        overlay(&mut self.test_files, overrides.test_files);
        overlay(&mut self.settings, overrides.settings);
        overlay(&mut self.tests, overrides.tests);
        overlay(&mut self.test_case_filter, overrides.test_case_filter);
        overlay(&mut self.platform, overrides.platform);
        overlay(&mut self.framework, overrides.framework);
        overlay(&mut self.cmd_line_args, overrides.cmd_line_args);
        if let Some(enabled) = overrides.enable_code_coverage {
            self.enable_code_coverage = enabled;
        }
        if let Some(fail_build) = overrides.fail_build {
            self.fail_build = fail_build;
        }
        self.normalized()
    }

    /// Expand and parse the platform selector
    pub fn platform(&self, expander: &dyn MacroExpander) -> Result<Option<Platform>> {
        expand_selector(self.platform.as_deref(), expander)
    }

    /// Expand and parse the framework selector
    pub fn framework(&self, expander: &dyn MacroExpander) -> Result<Option<Framework>> {
        expand_selector(self.framework.as_deref(), expander)
    }
}

fn overlay(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

fn expand_selector<T>(value: Option<&str>, expander: &dyn MacroExpander) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = Error>,
{
    let expanded = value.map(|v| expander.expand(v));
    match fix_empty_and_trim(expanded.as_deref()) {
        Some(v) => v.parse().map(Some),
        None => Ok(None),
    }
}
