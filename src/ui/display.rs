//! Display surfaces for the calculator.
//!
//! A sink receives the full display text after every button press. It never
//! reads calculator state itself.

use std::io::{self, Write};

/// A text surface the calculator display is written to.
pub trait DisplaySink {
    /// Show `text`, replacing whatever was shown before.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Called with the pressed key's label just before the matching `show`.
    fn note_key(&mut self, _label: &str) {}
}

/// Writes one line per display update to any `io::Write`.
pub struct WriterDisplay<W: Write> {
    writer: W,
    prefix_keys: bool,
    pending_key: Option<String>,
}

impl<W: Write> WriterDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prefix_keys: false,
            pending_key: None,
        }
    }

    /// Prefix every line with the label of the key that produced it.
    pub fn with_key_echo(mut self, enabled: bool) -> Self {
        self.prefix_keys = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriterDisplay<W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        match self.pending_key.take() {
            Some(key) => writeln!(self.writer, "[{}] {}", key, text)?,
            None => writeln!(self.writer, "{}", text)?,
        }
        self.writer.flush()
    }

    fn note_key(&mut self, label: &str) {
        if self.prefix_keys {
            self.pending_key = Some(label.to_string());
        }
    }
}

/// Keeps every display update in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    frames: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text shown so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The text currently shown.
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.frames.push(text.to_string());
        Ok(())
    }
}
