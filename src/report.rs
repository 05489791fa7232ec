//! Textual result contract.
//!
//! A successful read renders as `cycles=<v0>, instructions=<v1>, l1_misses=<v2>`,
//! a failure as `error=<reason>` where the reason is one of:
//!
//! * `not_initialized`: no counters are running (never started, or stopped)
//! * `open_failed:<index>:<code>`
//! * `control_failed:<code>`
//! * `read_failed:<code>`
//! * `corrupt:<expected>:<got>`
//!
//! `<code>` is the OS error number, or 0 if there is none.

use std::fmt::Write;

use arrayvec::ArrayString;

use crate::count::{Error, GroupReadResult, Result};

pub const REPORT_CAPACITY: usize = 256;

/// A rendered report, never longer than [`REPORT_CAPACITY`] bytes.
pub type Report = ArrayString<REPORT_CAPACITY>;

/// Labels of [`CounterSpec::default_profile`][crate::event::CounterSpec::default_profile].
pub const DEFAULT_LABELS: [&str; 3] = ["cycles", "instructions", "l1_misses"];

/// Renders results with one label per counter.
///
/// Labels pair with entries by position. Fields that would not fit in a
/// [`Report`] are dropped whole.
#[derive(Clone, Copy, Debug)]
pub struct Reporter<'a> {
    labels: &'a [&'a str],
}

impl Default for Reporter<'static> {
    fn default() -> Self {
        Self {
            labels: &DEFAULT_LABELS,
        }
    }
}

impl<'a> Reporter<'a> {
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self { labels }
    }

    pub fn report(&self, result: &Result<GroupReadResult>) -> Report {
        match result {
            Ok(it) => self.success(it),
            Err(e) => error(e),
        }
    }

    pub fn success(&self, result: &GroupReadResult) -> Report {
        let mut out = Report::new();
        for (i, (label, entry)) in self.labels.iter().zip(&result.entries).enumerate() {
            let sep = if i == 0 { "" } else { ", " };
            let len = out.len();
            if write!(out, "{}{}={}", sep, label, entry.value).is_err() {
                out.truncate(len);
                break;
            }
        }
        out
    }
}

/// Renders `result` with the default labels.
pub fn report(result: &Result<GroupReadResult>) -> Report {
    Reporter::default().report(result)
}

/// Renders an error as `error=<reason>`.
pub fn error(e: &Error) -> Report {
    let mut out = Report::new();
    let code = e.code().unwrap_or_default();
    let written = match e {
        Error::NotStarted | Error::Stopped => write!(out, "error=not_initialized"),
        Error::OpenFailed { index, .. } => write!(out, "error=open_failed:{}:{}", index, code),
        Error::ControlFailed(_) => write!(out, "error=control_failed:{}", code),
        Error::ReadFailed(_) => write!(out, "error=read_failed:{}", code),
        Error::Corrupt { expected, got } => write!(out, "error=corrupt:{}:{}", expected, got),
    };
    // The longest reason is far below the capacity.
    debug_assert!(written.is_ok());
    out
}

#[cfg(test)]
mod test {
    use std::io;

    use super::*;
    use crate::count::Entry;

    fn result(values: &[u64]) -> GroupReadResult {
        GroupReadResult {
            record_count: values.len() as _,
            entries: values
                .iter()
                .enumerate()
                .map(|(i, &value)| Entry { id: i as _, value })
                .collect(),
        }
    }

    #[test]
    fn test_success() {
        let report = report(&Ok(result(&[1000, 400, 10])));
        assert_eq!(report.as_str(), "cycles=1000, instructions=400, l1_misses=10");
    }

    #[test]
    fn test_max_values_fit() {
        let report = report(&Ok(result(&[u64::MAX; 3])));
        assert_eq!(
            report.as_str(),
            format!(
                "cycles={0}, instructions={0}, l1_misses={0}",
                u64::MAX
            )
        );
    }

    #[test]
    fn test_errors() {
        let os = |code| io::Error::from_raw_os_error(code);
        let cases = [
            (Error::NotStarted, "error=not_initialized"),
            (Error::Stopped, "error=not_initialized"),
            (
                Error::OpenFailed {
                    index: 2,
                    source: os(13),
                },
                "error=open_failed:2:13",
            ),
            (Error::ControlFailed(os(22)), "error=control_failed:22"),
            (Error::ReadFailed(os(5)), "error=read_failed:5"),
            (
                Error::ReadFailed(io::ErrorKind::Unsupported.into()),
                "error=read_failed:0",
            ),
            (
                Error::Corrupt {
                    expected: 3,
                    got: 1,
                },
                "error=corrupt:3:1",
            ),
        ];
        for (e, expected) in cases {
            assert_eq!(report(&Err(e)).as_str(), expected);
        }
    }

    #[test]
    fn test_custom_labels() {
        let reporter = Reporter::new(&["branches", "branch_misses"]);
        let report = reporter.report(&Ok(result(&[50, 3])));
        assert_eq!(report.as_str(), "branches=50, branch_misses=3");
    }

    #[test]
    fn test_fewer_entries_than_labels() {
        let report = report(&Ok(result(&[1])));
        assert_eq!(report.as_str(), "cycles=1");
    }

    #[test]
    fn test_overflow_truncates_at_field() {
        let long = "x".repeat(200);
        let labels = [long.as_str(), long.as_str()];
        let report = Reporter::new(&labels).report(&Ok(result(&[1, 2])));
        assert_eq!(report.len(), 202);
        assert!(report.ends_with("=1"));
    }
}
