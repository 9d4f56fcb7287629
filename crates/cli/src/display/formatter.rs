use nunit_runner_core::{RunOutcome, RunReport};

/// One-word build status for an outcome
pub fn format_outcome(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Success => "SUCCESS",
        RunOutcome::Unstable { .. } => "UNSTABLE",
        RunOutcome::Failed { .. } => "FAILURE",
    }
}

pub fn print_report(report: &RunReport) {
    println!("Finished: {}", format_outcome(&report.outcome));
    for (key, value) in report.env_vars() {
        println!("{key}={value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outcome() {
        assert_eq!(format_outcome(&RunOutcome::Success), "SUCCESS");
        assert_eq!(
            format_outcome(&RunOutcome::Unstable { exit_code: 1 }),
            "UNSTABLE"
        );
        assert_eq!(
            format_outcome(&RunOutcome::Failed {
                exit_code: 2,
                reason: "NUnit exited with 2".to_string(),
            }),
            "FAILURE"
        );
    }
}
