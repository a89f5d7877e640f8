//! The interactive console flow.
//!
//! A session greets the user, runs the fixed arithmetic checks, and lists
//! the feature set twice (in full, then filtered by the configured marker).
//! It is generic over its input and output so the binary can hand it
//! stdin/stdout and tests can hand it byte buffers.

use std::io::{BufRead, Write};

use crate::banner::write_welcome;
use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::features::{features, filter_features};
use crate::numeric::add;
use crate::printer::write_range;
use crate::text::to_upper;

/// What a completed session printed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Name that was greeted, if the input line was not blank
    pub greeted: Option<String>,
    /// Number of entries in the full feature listing
    pub features_listed: usize,
    /// Number of entries in the filtered feature listing
    pub filtered_listed: usize,
}

/// One run of the console flow
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ShowcaseConfig,
}

impl Session {
    /// Create a session with the given settings
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }

    /// Run the full flow, reading from `input` and writing to `output`.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionSummary>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let mut summary = SessionSummary::default();

        write_welcome(output, &self.config.project_name)?;

        write!(output, "\nPlease enter your name: ")?;
        output.flush()?;
        summary.greeted = read_name(input)?;
        if let Some(name) = &summary.greeted {
            writeln!(output, "Hello, {name}!")?;
            writeln!(output, "Uppercase form: {}", to_upper(name))?;
        }

        write_math(output)?;

        let list = features();
        summary.features_listed = write_range(output, &list, "Project Features")?;

        let title = format!("{} related features", self.config.feature_marker);
        summary.filtered_listed = write_range(
            output,
            filter_features(&list, &self.config.feature_marker),
            &title,
        )?;

        writeln!(output, "\nC++20 CMake multi-file build successful!")?;

        if self.config.wait_for_exit {
            write!(output, "Press Enter to exit...")?;
            output.flush()?;
            read_line_lossy(input)?;
        }
        output.flush()?;

        tracing::info!(
            greeted = summary.greeted.is_some(),
            features = summary.features_listed,
            filtered = summary.filtered_listed,
            "session finished"
        );
        Ok(summary)
    }
}

/// Read one line of raw bytes, replacing invalid UTF-8 with U+FFFD.
///
/// Returns `None` at end of input.
fn read_line_lossy<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Read one line and strip its line ending.
///
/// Returns `None` on end of input or when the line is blank.
fn read_name<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let Some(line) = read_line_lossy(input)? else {
        tracing::debug!("input closed before a name was entered");
        return Ok(None);
    };

    let name = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line.as_str());

    if name.trim().is_empty() {
        tracing::debug!("blank name, skipping greeting");
        return Ok(None);
    }
    Ok(Some(name.to_string()))
}

fn write_math<W: Write + ?Sized>(output: &mut W) -> Result<()> {
    writeln!(output, "\nMath tests with C++20 concepts:")?;
    writeln!(output, "Integer: 5 + 3 = {}", add(5i32, 3))?;
    writeln!(output, "Float: 2.5 + 1.7 = {:.2}", add(2.5f32, 1.7f32))?;
    writeln!(output, "Double: 10.25 + 5.75 = {:.2}", add(10.25f64, 5.75))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(config: ShowcaseConfig, input: &str) -> (SessionSummary, String) {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let summary = Session::new(config).run(&mut reader, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn strips_crlf() {
        let mut reader = "bob\r\n".as_bytes();
        assert_eq!(read_name(&mut reader).unwrap(), Some("bob".to_string()));
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut reader = "  bob smith \n".as_bytes();
        assert_eq!(read_name(&mut reader).unwrap(), Some("  bob smith ".to_string()));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut reader: &[u8] = b"Jos\xe9\n";
        assert_eq!(read_name(&mut reader).unwrap(), Some("Jos\u{FFFD}".to_string()));
    }

    #[test]
    fn eof_means_no_name() {
        let mut reader = "".as_bytes();
        assert_eq!(read_name(&mut reader).unwrap(), None);
    }

    #[test]
    fn math_lines() {
        let mut out = Vec::new();
        write_math(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Integer: 5 + 3 = 8\n"));
        assert!(out.contains("Float: 2.5 + 1.7 = 4.20\n"));
        assert!(out.contains("Double: 10.25 + 5.75 = 16.00\n"));
    }

    #[test]
    fn no_exit_prompt_when_disabled() {
        let config = ShowcaseConfig {
            wait_for_exit: false,
            ..Default::default()
        };
        let (_, out) = run_with(config, "bob\n");
        assert!(!out.contains("Press Enter to exit..."));
        assert!(out.ends_with("build successful!\n"));
    }

    #[test]
    fn custom_marker_changes_title_and_filter() {
        let config = ShowcaseConfig {
            feature_marker: "CMake".to_string(),
            ..Default::default()
        };
        let (summary, out) = run_with(config, "\n\n");
        assert!(out.contains("\nCMake related features:\n1. Advanced CMake configuration\n"));
        assert_eq!(summary.filtered_listed, 1);
    }
}
