//! Status Alerts
//!
//! Timestamped, severity-tagged status lines for the user. Unlike the
//! `log` output, alerts are always shown and are the only channel for
//! user-visible outcomes.
//!
//! An error alert only writes. Ending the process is left to the caller
//! at the outermost boundary.

mod palette;

use std::io::{self, Write};

use chrono::Local;

pub use palette::{ColorChoice, Palette};

/// Timestamp layout used as the alert line prefix.
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S";

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Returns the tag printed between brackets.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Writes alerts to a target stream.
pub struct Alerter<W: Write = io::Stderr> {
    target: W,
    palette: Palette,
}

impl Alerter<io::Stderr> {
    /// Creates an alerter writing to stderr.
    pub fn stderr(palette: Palette) -> Self {
        Self::new(io::stderr(), palette)
    }
}

impl<W: Write> Alerter<W> {
    pub fn new(target: W, palette: Palette) -> Self {
        Self { target, palette }
    }

    /// Writes a single alert line.
    ///
    /// With `repeat` the line ends in a carriage return so the next alert
    /// overwrites it. With `flush` the stream is flushed immediately.
    pub fn alert(&mut self, severity: Severity, text: &str, repeat: bool, flush: bool) -> io::Result<()> {
        let line = format_line(severity, text, repeat);
        write!(self.target, "{}", self.palette.paint(severity, &line))?;
        if flush {
            self.target.flush()?;
        }
        Ok(())
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.alert(Severity::Success, text, false, true)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.alert(Severity::Error, text, false, true)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.alert(Severity::Warning, text, false, true)
    }

    /// Info alerts may overwrite the current line for progress updates.
    pub fn info(&mut self, text: &str, repeat: bool) -> io::Result<()> {
        self.alert(Severity::Info, text, repeat, true)
    }

    /// Consumes the alerter, returning the target stream.
    pub fn into_inner(self) -> W {
        self.target
    }
}

fn format_line(severity: Severity, text: &str, repeat: bool) -> String {
    let terminator = if repeat { '\r' } else { '\n' };
    format!(
        "{} [{:>7}] {}{}",
        Local::now().format(TIMESTAMP_FORMAT),
        severity.label(),
        text,
        terminator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Alerter<Vec<u8>> {
        Alerter::new(Vec::new(), Palette::Plain)
    }

    fn written(alerter: Alerter<Vec<u8>>) -> String {
        String::from_utf8(alerter.into_inner()).unwrap()
    }

    #[test]
    fn test_severity_is_right_aligned() {
        let mut alerter = plain();
        alerter.info("hello", false).unwrap();

        let out = written(alerter);
        assert!(out.contains("[   info] hello\n"));
    }

    #[test]
    fn test_repeat_ends_with_carriage_return() {
        let mut alerter = plain();
        alerter.info("50%", true).unwrap();

        let out = written(alerter);
        assert!(out.ends_with("50%\r"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_error_alert_returns_normally() {
        let mut alerter = plain();
        alerter.error("boom").unwrap();
        alerter.success("still here").unwrap();

        let out = written(alerter);
        assert!(out.contains("[  error] boom"));
        assert!(out.contains("[success] still here"));
    }

    #[test]
    fn test_timestamp_prefix() {
        let mut alerter = plain();
        alerter.warning("careful").unwrap();

        let out = written(alerter);
        let stamp = out.split(' ').next().unwrap();
        // 20261016-09:15:02
        assert_eq!(stamp.len(), 17);
        assert_eq!(&stamp[8..9], "-");
    }

    #[test]
    fn test_plain_palette_has_no_escape_codes() {
        let mut alerter = plain();
        alerter.success("ok").unwrap();
        assert!(!written(alerter).contains('\x1b'));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Success.label(), "success");
        assert_eq!(Severity::Error.label(), "error");
        assert_eq!(Severity::Warning.label(), "warning");
        assert_eq!(Severity::Info.label(), "info");
    }
}
