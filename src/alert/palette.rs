//! Alert color strategy, chosen once at start-up.

use std::io::IsTerminal;

use clap::ValueEnum;
use colored::Colorize;
use log::{debug, warn};
use once_cell::sync::OnceCell;

use super::Severity;

static DEGRADE_WARNED: OnceCell<()> = OnceCell::new();

/// User preference for colored alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Color whenever the terminal can render it
    Always,
    /// Never color
    Never,
}

/// How alert lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// ANSI colors per severity
    Rich,
    /// Plain text
    Plain,
}

impl Palette {
    /// Inspects the process environment and picks a palette.
    pub fn detect(choice: ColorChoice) -> Self {
        let term = std::env::var("TERM").ok();
        let palette = Self::select(
            choice,
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
            term.as_deref(),
        );

        if palette == Palette::Rich {
            colored::control::set_override(true);
        }
        palette
    }

    /// Decides the palette from already-gathered capabilities.
    pub fn select(choice: ColorChoice, is_terminal: bool, no_color: bool, term: Option<&str>) -> Self {
        match choice {
            ColorChoice::Never => Palette::Plain,
            ColorChoice::Auto => {
                if is_terminal && !no_color && term != Some("dumb") {
                    Palette::Rich
                } else {
                    debug!("Colored alerts disabled (terminal: {}, NO_COLOR: {})", is_terminal, no_color);
                    Palette::Plain
                }
            }
            ColorChoice::Always => {
                if term == Some("dumb") {
                    warn_degraded_once(&DEGRADE_WARNED);
                    Palette::Plain
                } else {
                    Palette::Rich
                }
            }
        }
    }

    /// Applies the severity color to a fully formatted line.
    pub fn paint(self, severity: Severity, line: &str) -> String {
        match self {
            Palette::Plain => line.to_string(),
            Palette::Rich => match severity {
                Severity::Success => line.green().to_string(),
                Severity::Error => line.red().to_string(),
                Severity::Warning => line.yellow().to_string(),
                Severity::Info => line.to_string(),
            },
        }
    }
}

/// Logs the plain-text fallback unless `warned` is already set.
///
/// Returns whether the warning was emitted.
fn warn_degraded_once(warned: &OnceCell<()>) -> bool {
    if warned.set(()).is_err() {
        return false;
    }
    warn!("Terminal does not support colors. Falling back to plain alerts.");
    true
}
