//! Environment variable macro expansion

use crate::interfaces::MacroExpander;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static MACRO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("valid macro pattern"));

/// Expands `$NAME` and `${NAME}` from a captured set of variables.
///
/// Unknown variables are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EnvMacroExpander {
    vars: HashMap<String, String>,
}

impl EnvMacroExpander {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Snapshot the current process environment
    pub fn from_env() -> Self {
        Self::new(std::env::vars().collect())
    }

    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl MacroExpander for EnvMacroExpander {
    fn expand(&self, value: &str) -> String {
        if !value.contains('$') {
            return value.to_string();
        }
        MACRO_PATTERN
            .replace_all(value, |caps: &Captures<'_>| {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                match self.vars.get(name) {
                    Some(v) => v.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Expander that returns its input unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExpander;

impl MacroExpander for NoopExpander {
    fn expand(&self, value: &str) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> EnvMacroExpander {
        EnvMacroExpander::new(HashMap::from([
            ("WORKSPACE".to_string(), "/ws".to_string()),
            ("BUILD_NUMBER".to_string(), "42".to_string()),
        ]))
    }

    #[test]
    fn test_expands_both_forms() {
        let e = expander();
        assert_eq!(e.expand("$WORKSPACE/out"), "/ws/out");
        assert_eq!(e.expand("${WORKSPACE}/run-${BUILD_NUMBER}"), "/ws/run-42");
    }

    #[test]
    fn test_unknown_variables_are_kept() {
        let e = expander();
        assert_eq!(e.expand("$MISSING and ${ALSO_MISSING}"), "$MISSING and ${ALSO_MISSING}");
        assert_eq!(e.expand("%ERRORLEVEL%"), "%ERRORLEVEL%");
    }

    #[test]
    fn test_noop() {
        assert_eq!(NoopExpander.expand("$WORKSPACE"), "$WORKSPACE");
    }
}
