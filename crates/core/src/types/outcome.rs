use serde::{Deserialize, Serialize};

/// Terminal classification of one runner invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Success,
    Unstable {
        exit_code: i32,
    },
    Failed {
        exit_code: i32,
        reason: String,
    },
}

impl RunOutcome {
    /// Classify a finished process from its exit code and the fail-build policy
    pub fn classify(exit_code: i32, fail_build: bool) -> Self {
        match exit_code {
            0 => RunOutcome::Success,
            code if fail_build => RunOutcome::Failed {
                exit_code: code,
                reason: format!("NUnit exited with {code}"),
            },
            code => RunOutcome::Unstable { exit_code: code },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::Unstable { exit_code } | RunOutcome::Failed { exit_code, .. } => *exit_code,
        }
    }
}
