//! `validators check`: run one validator over a list of values.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use validators::config::OutputFormat;
use validators::{CheckOptions, Validated, ValidatorKind};

use crate::ui;

/// Longest value echoed back in text output.
const MAX_DISPLAY_CHARS: usize = 120;

/// Expand the command-line values, replacing `-` with the non-empty lines
/// read from `stdin`. Stdin is only read once.
pub fn collect_values(args: Vec<String>, stdin: impl BufRead) -> Result<Vec<String>> {
    let mut stdin = Some(stdin);
    let mut values = Vec::with_capacity(args.len());

    for arg in args {
        if arg != "-" {
            values.push(arg);
            continue;
        }
        let Some(reader) = stdin.take() else {
            tracing::warn!("stdin already read, ignoring repeated '-'");
            continue;
        };
        for line in reader.lines() {
            let line = line.context("Failed to read values from stdin")?;
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                values.push(line.to_string());
            }
        }
    }

    Ok(values)
}

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    validator: &'a str,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    args: BTreeMap<&'a str, &'a str>,
}

/// Check every value and report to stdout. Returns whether all values passed.
pub fn cmd_check(
    kind: ValidatorKind,
    values: &[String],
    opts: &CheckOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_valid = write_report(&mut out, kind, values, opts, format, quiet)?;
    out.flush()?;
    Ok(all_valid)
}

/// Write one result per value. `quiet` drops passing values from text
/// output; JSON output always has one line per value.
pub fn write_report(
    out: &mut impl Write,
    kind: ValidatorKind,
    values: &[String],
    opts: &CheckOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<bool> {
    let mut failures = 0usize;

    for value in values {
        let result = kind.check(value, opts);
        if result.is_err() {
            failures += 1;
        }
        match format {
            OutputFormat::Text => write_text(out, value, &result, quiet)?,
            OutputFormat::Json => write_json(out, kind, value, &result)?,
        }
    }

    tracing::debug!(validator = %kind, total = values.len(), failures, "Check finished");
    Ok(failures == 0)
}

fn write_text(out: &mut impl Write, value: &str, result: &Validated, quiet: bool) -> Result<()> {
    let display = ui::format::truncate_value(value, MAX_DISPLAY_CHARS);
    match result {
        Ok(()) if quiet => {}
        Ok(()) => writeln!(out, "{} {}", ui::result_icon(true), display)?,
        Err(err) => match err.reason() {
            Some(reason) => writeln!(
                out,
                "{} {}: {}",
                ui::result_icon(false),
                display,
                ui::colors::error(reason)
            )?,
            None => writeln!(
                out,
                "{} {} {}",
                ui::result_icon(false),
                display,
                ui::colors::secondary(&format!("(not a valid {})", err.func()))
            )?,
        },
    }
    Ok(())
}

fn write_json(
    out: &mut impl Write,
    kind: ValidatorKind,
    value: &str,
    result: &Validated,
) -> Result<()> {
    let record = match result {
        Ok(()) => CheckRecord {
            validator: kind.name(),
            value,
            valid: true,
            reason: None,
            args: BTreeMap::new(),
        },
        Err(err) => CheckRecord {
            validator: kind.name(),
            value,
            valid: false,
            reason: err.reason(),
            args: err
                .args()
                .iter()
                .map(|(name, arg)| (*name, arg.as_str()))
                .collect(),
        },
    };

    serde_json::to_writer(&mut *out, &record).context("Failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report(
        kind: ValidatorKind,
        values: &[&str],
        format: OutputFormat,
        quiet: bool,
    ) -> (bool, String) {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut buf = Vec::new();
        let ok = write_report(
            &mut buf,
            kind,
            &values,
            &CheckOptions::default(),
            format,
            quiet,
        )
        .unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_collect_values_without_stdin() {
        let values = collect_values(vec!["a".into(), "b".into()], io::empty()).unwrap();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_collect_values_reads_stdin_in_place() {
        let stdin = io::Cursor::new("one\r\n\ntwo\n");
        let values =
            collect_values(vec!["first".into(), "-".into(), "last".into()], stdin).unwrap();
        assert_eq!(values, vec!["first", "one", "two", "last"]);
    }

    #[test]
    fn test_collect_values_stdin_read_once() {
        let stdin = io::Cursor::new("x\n");
        let values = collect_values(vec!["-".into(), "-".into()], stdin).unwrap();
        assert_eq!(values, vec!["x"]);
    }

    #[test]
    fn test_text_report_all_valid() {
        let (ok, output) = report(
            ValidatorKind::Email,
            &["someone@example.com", "a.b@example.org"],
            OutputFormat::Text,
            false,
        );
        assert!(ok);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("someone@example.com"));
        assert!(output.contains('✓'));
    }

    #[test]
    fn test_text_report_failure_with_reason() {
        let (ok, output) = report(
            ValidatorKind::Between,
            &["12", "twelve"],
            OutputFormat::Text,
            false,
        );
        assert!(!ok);
        assert!(output.contains('✗'));
        assert!(output.contains("'twelve' is not a number"));
    }

    #[test]
    fn test_text_report_failure_without_reason() {
        let (ok, output) = report(
            ValidatorKind::Slug,
            &["Not A Slug"],
            OutputFormat::Text,
            false,
        );
        assert!(!ok);
        assert!(output.contains("not a valid slug"));
    }

    #[test]
    fn test_text_report_quiet_hides_passes() {
        let (ok, output) = report(
            ValidatorKind::Slug,
            &["my-slug", "bad slug"],
            OutputFormat::Text,
            true,
        );
        assert!(!ok);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("bad slug"));
        assert!(!output.contains("my-slug"));
    }

    #[test]
    fn test_json_report() {
        let (ok, output) = report(
            ValidatorKind::Slug,
            &["my-slug", "bad slug"],
            OutputFormat::Json,
            true,
        );
        assert!(!ok);

        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["validator"], "slug");
        assert_eq!(lines[0]["valid"], true);
        assert!(lines[0].get("args").is_none());

        assert_eq!(lines[1]["value"], "bad slug");
        assert_eq!(lines[1]["valid"], false);
        assert_eq!(lines[1]["args"]["value"], "bad slug");
        assert!(lines[1].get("reason").is_none());
    }

    #[test]
    fn test_json_report_includes_reason() {
        let (_, output) = report(ValidatorKind::Cron, &["* * *"], OutputFormat::Json, false);
        let line: Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(line["reason"], "Badly formatted cron string");
    }
}
