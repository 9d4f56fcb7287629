//! Tool resolution over an explicit list of installations

use crate::config::installation::{select_installation, ToolInstallation};
use crate::interfaces::{LogSink, MacroExpander, ToolResolver};
use std::sync::Arc;

/// Resolves installation names against the configured installations
pub struct InstallationResolver {
    installations: Vec<ToolInstallation>,
    expander: Arc<dyn MacroExpander>,
}

impl InstallationResolver {
    pub fn new(installations: Vec<ToolInstallation>, expander: Arc<dyn MacroExpander>) -> Self {
        Self {
            installations,
            expander,
        }
    }
}

impl ToolResolver for InstallationResolver {
    fn resolve(&self, name: Option<&str>, log: &dyn LogSink) -> String {
        let (installation, fell_back) = select_installation(&self.installations, name);
        if fell_back {
            log.println("Selected NUnit installation does not exist. Using Default");
        }
        let installation = installation.for_environment(self.expander.as_ref());
        tracing::debug!(
            "Resolved installation {} to {}",
            installation.name,
            installation.home
        );
        installation.home
    }
}
