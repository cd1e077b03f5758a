//! Input and output channels used by `read` and `print`.
//!
//! The evaluator only talks to a [`Console`], so the same program can run
//! against the process's stdin/stdout, any reader/writer pair, or a scripted
//! in-memory console in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented input/output channel
pub trait Console {
    /// Read one line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line followed by a newline
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console backed by any buffered reader and writer
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        while buffer.ends_with(['\n', '\r']) {
            buffer.pop();
        }
        Ok(Some(buffer))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }
}

/// Console reading the process's stdin and writing its stdout
pub type StdConsole = StreamConsole<io::StdinLock<'static>, io::Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        StreamConsole::new(io::stdin().lock(), io::stdout())
    }
}

/// In-memory console with scripted input and captured output
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(input: impl IntoIterator<Item = S>) -> Self {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Queue another input line
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Lines written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Take the lines written so far, leaving the capture empty
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Input lines not consumed yet
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_console_strips_terminators() {
        let mut console = StreamConsole::new("12\r\n-3\nlast".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("12"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("-3"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_stream_console_writes_lines() {
        let mut console = StreamConsole::new(io::empty(), Vec::new());
        console.write_line("1").unwrap();
        console.write_line("22").unwrap();
        assert_eq!(console.into_output(), b"1\n22\n");
    }

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["5"]);
        console.push_input("6");
        assert_eq!(console.remaining_input(), 2);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("5"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("6"));
        assert_eq!(console.read_line().unwrap(), None);

        console.write_line("out").unwrap();
        assert_eq!(console.output().to_vec(), vec!["out".to_string()]);
        assert_eq!(console.take_output(), vec!["out".to_string()]);
        assert!(console.output().is_empty());
    }
}
