//! Console report
//!
//! Operator-facing lines printed to stdout. The wording is relied upon when
//! reading CI logs, so message builders are kept separate from printing.

use colored::*;
use radar_core::domain::verdict::Verdict;
use std::time::Duration;

pub fn started_message(count: usize) -> String {
    format!("Started {} test runs.", count)
}

/// Lines summarising a verdict, in print order
pub fn verdict_lines(verdict: &Verdict, timeout: Duration) -> Vec<String> {
    if verdict.timed_out {
        let total = verdict.pass_count + verdict.fail_count + verdict.unresolved.len();
        let mut lines = vec![
            format!(
                "Some test runs did not complete in the allowed window of {} seconds",
                timeout.as_secs()
            ),
            format!(
                "{} of {} test runs did not complete.",
                verdict.unresolved.len(),
                total
            ),
        ];
        lines.extend(
            verdict
                .unresolved
                .iter()
                .map(|run| format!("  - {}", run)),
        );
        return lines;
    }

    if verdict.fail_count > 0 {
        return vec![format!(
            "{} test runs passed. {} test runs failed.",
            verdict.pass_count, verdict.fail_count
        )];
    }

    vec!["All test runs passed.".to_string()]
}

pub fn print_started(count: usize) {
    println!("{}", started_message(count).bold());
}

pub fn print_verdict(verdict: &Verdict, timeout: Duration) {
    for line in verdict_lines(verdict, timeout) {
        if verdict.is_success() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core::domain::run::{RunDescriptor, RunResult};
    use serde_json::json;

    const TIMEOUT: Duration = Duration::from_secs(600);

    fn result(id: &str, status: &str) -> RunResult {
        RunResult::from_payload(id, json!({ "result": status }))
    }

    #[test]
    fn test_started_message() {
        assert_eq!(started_message(2), "Started 2 test runs.");
        assert_eq!(started_message(0), "Started 0 test runs.");
    }

    #[test]
    fn test_all_passed() {
        let verdict = Verdict::completed(&[result("r1", "pass"), result("r2", "pass")]);
        assert_eq!(verdict_lines(&verdict, TIMEOUT), vec!["All test runs passed."]);
    }

    #[test]
    fn test_some_failed() {
        let verdict = Verdict::completed(&[result("r1", "fail"), result("r2", "pass")]);
        assert_eq!(
            verdict_lines(&verdict, TIMEOUT),
            vec!["1 test runs passed. 1 test runs failed."]
        );
    }

    #[test]
    fn test_timed_out() {
        let verdict = Verdict::timed_out(
            &[result("r2", "pass")],
            vec![RunDescriptor::new("b1", "t1", "r1")],
        );
        assert_eq!(
            verdict_lines(&verdict, TIMEOUT),
            vec![
                "Some test runs did not complete in the allowed window of 600 seconds",
                "1 of 2 test runs did not complete.",
                "  - b1/t1/r1",
            ]
        );
    }
}
