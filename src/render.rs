//! Display surfaces for tool output.
//!
//! Widgets never print on their own. After every state change they hand the
//! current display string to a [`DisplaySurface`], which presents it verbatim.

use std::io::Write;
use tracing::warn;

/// Something that can show a widget's display string.
pub trait DisplaySurface {
    /// Present `display` exactly as given.
    fn render(&mut self, display: &str);
}

/// Writes each rendered display as one line to a writer.
pub struct TerminalSurface<W: Write> {
    out: W,
    /// Prefix placed before each line, e.g. `"= "`.
    prefix: String,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn render(&mut self, display: &str) {
        if let Err(e) = writeln!(self.out, "{}{}", self.prefix, display) {
            warn!("Failed to write display: {}", e);
        }
    }
}

/// Keeps every rendered frame. Useful for tests and for replaying a session.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recently rendered display.
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, display: &str) {
        self.frames.push(display.to_string());
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn render(&mut self, _display: &str) {}
}
