//! Line-based input and output used by a game session

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Source of player input, one line at a time
pub trait LineInput {
    /// Read one line without its trailing newline
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails or the input is exhausted.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Sink for game output
///
/// Writes never fail from the caller's point of view.
pub trait LineOutput {
    /// Write text followed by a newline
    fn println(&mut self, line: &str);

    /// Write text without a trailing newline
    fn print(&mut self, text: &str);
}

impl<T: LineInput + ?Sized> LineInput for &mut T {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

impl<T: LineOutput + ?Sized> LineOutput for &mut T {
    fn println(&mut self, line: &str) {
        (**self).println(line);
    }

    fn print(&mut self, text: &str) {
        (**self).print(text);
    }
}

/// Line input over any buffered reader (usually stdin)
pub struct ReaderInput<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> ReaderInput<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self) -> io::Result<String> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ));
        }
        Ok(self.buffer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Line output over any writer (usually stdout)
pub struct WriterOutput<W> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LineOutput for WriterOutput<W> {
    fn println(&mut self, line: &str) {
        if let Err(error) = writeln!(self.writer, "{line}") {
            warn!(%error, "failed to write output line");
        }
    }

    fn print(&mut self, text: &str) {
        // Prompts must be visible before blocking on input
        if let Err(error) = write!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            warn!(%error, "failed to write prompt");
        }
    }
}

/// Input replayed from a fixed script, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Output captured in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    buffer: String,
}

impl RecordingOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.lines()
    }

    /// Number of output lines containing `needle`
    #[must_use]
    pub fn count_lines(&self, needle: &str) -> usize {
        self.lines().filter(|line| line.contains(needle)).count()
    }
}

impl LineOutput for RecordingOutput {
    fn println(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
