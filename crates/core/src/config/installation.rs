//! Named console runner installations

use crate::interfaces::MacroExpander;
use serde::{Deserialize, Serialize};

/// A named console runner installation; `home` is the executable path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInstallation {
    pub name: String,
    pub home: String,
}

impl ToolInstallation {
    pub const DEFAULT: &'static str = "Default";

    pub fn new(name: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home: home.into(),
        }
    }

    /// The installation synthesized when none is configured
    pub fn fallback() -> Self {
        let exe = if cfg!(windows) {
            "nunit3-console.exe"
        } else {
            "nunit-console"
        };
        Self::new(Self::DEFAULT, exe)
    }

    /// Copy of this installation with macros in `home` expanded
    pub fn for_environment(&self, expander: &dyn MacroExpander) -> Self {
        Self::new(self.name.clone(), expander.expand(&self.home))
    }
}

/// Pick the default installation: the one named `Default`, else the first,
/// else a synthesized one.
pub fn default_installation(installations: &[ToolInstallation]) -> ToolInstallation {
    installations
        .iter()
        .find(|i| i.name == ToolInstallation::DEFAULT)
        .or_else(|| installations.first())
        .cloned()
        .unwrap_or_else(ToolInstallation::fallback)
}

/// Select the installation for `requested`.
///
/// The flag is true when a name was requested but not found and the default
/// was used instead.
pub fn select_installation(
    installations: &[ToolInstallation],
    requested: Option<&str>,
) -> (ToolInstallation, bool) {
    let Some(name) = requested else {
        return (default_installation(installations), false);
    };
    match installations.iter().find(|i| i.name == name) {
        Some(found) => (found.clone(), false),
        None => (default_installation(installations), true),
    }
}
