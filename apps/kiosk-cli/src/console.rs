//! # Console I/O
//!
//! Line-oriented prompt/print helper over any `BufRead` + `Write` pair.
//! The binary wires it to locked stdin/stdout; tests use `Cursor` and
//! `Vec<u8>`.
//!
//! ```text
//! prompt("Choice: ")
//!      │
//!      ├── line read ──► Some(trimmed line)
//!      │
//!      └── EOF ────────► None (caller winds the session down)
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

/// Operator terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Reports a recoverable error to the operator.
    pub fn error(&mut self, err: &AppError) -> AppResult<()> {
        self.say(format_args!("Error: {}", err.message))
    }

    /// Prints `label` without a newline and reads one line.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_detects_eof() {
        let mut console = Console::new(Cursor::new("  2 \n"), Vec::new());

        assert_eq!(console.prompt("Choice: ").unwrap(), Some("2".to_string()));
        assert_eq!(console.prompt("Choice: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Choice: Choice: ");
    }

    #[test]
    fn test_error_line() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.error(&AppError::validation("bad input")).unwrap();
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "Error: bad input\n"
        );
    }
}
