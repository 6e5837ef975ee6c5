//! Output sink for CLI commands
//!
//! Every line a command prints goes through [`Output`], which wraps any
//! [`Write`] implementation. The binary hands it a locked stdout; tests
//! hand it a `Vec<u8>` and read the text back.

use std::io::{self, Write};

use colored::Colorize;

/// Visual emphasis attached to a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Warning,
    /// Starred (important) tasks
    Starred,
    /// List headers in the overview
    Header,
    Accent,
    Strong,
}

/// Output helper for consistent formatting
pub struct Output<W: Write> {
    sink: W,
    color: bool,
    verbose: bool,
}

impl<W: Write> Output<W> {
    pub fn new(sink: W, color: bool, verbose: bool) -> Self {
        Self {
            sink,
            color,
            verbose,
        }
    }

    /// Applies a tone to text, or returns it untouched when color is off
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Error => text.red().to_string(),
            Tone::Warning | Tone::Starred => text.yellow().to_string(),
            Tone::Header => text.bold().underline().to_string(),
            Tone::Accent => text.blue().to_string(),
            Tone::Strong => text.bold().to_string(),
        }
    }

    /// Prints a plain line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.sink, "{}", text)
    }

    /// Prints a line carrying the given tone
    pub fn styled(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        self.line(&painted)
    }

    /// Prints an error message
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.styled(message, Tone::Error)
    }

    /// Prints a warning message
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.styled(message, Tone::Warning)
    }

    /// Prints a blank line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.sink)
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    /// Flushes and returns the underlying sink
    pub fn into_inner(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Output<Vec<u8>>) -> io::Result<()>) -> String {
        let mut out = Output::new(Vec::new(), false, false);
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn plain_lines() {
        let text = captured(|out| {
            out.line("one")?;
            out.blank()?;
            out.line("two")
        });

        assert_eq!(text, "one\n\ntwo\n");
    }

    #[test]
    fn tones_are_dropped_without_color() {
        let text = captured(|out| {
            out.error("boom")?;
            out.warn("careful")?;
            out.styled("header", Tone::Header)
        });

        assert_eq!(text, "boom\ncareful\nheader\n");
    }

    #[test]
    fn painted_text_keeps_content() {
        let out = Output::new(Vec::new(), true, false);

        assert!(out.paint("Groceries", Tone::Header).contains("Groceries"));
        assert_eq!(Output::new(Vec::new(), false, false).paint("plain", Tone::Strong), "plain");
    }

    #[test]
    fn verbose_flag() {
        assert!(Output::new(Vec::new(), false, true).is_verbose());
        assert!(!Output::new(Vec::new(), false, false).is_verbose());
    }
}
