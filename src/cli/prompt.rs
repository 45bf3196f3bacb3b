//! Line-oriented prompts over any reader/writer pair
//!
//! Every read returns `Ok(None)` once input is exhausted so callers can end
//! the session cleanly instead of spinning on EOF.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts; menu handlers print results here too
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `message` and flush without a trailing newline
    fn ask(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Read one line without its line ending, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for text, repeating until a non-blank line is entered
    ///
    /// # Errors
    /// Propagates I/O errors from either stream
    pub fn text(&mut self, message: &str) -> io::Result<Option<String>> {
        self.ask(message)?;
        loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line.trim().to_string())),
            }
        }
    }

    /// Ask for a value parsed with [`FromStr`], repeating `invalid` until it parses
    ///
    /// # Errors
    /// Propagates I/O errors from either stream
    pub fn parsed<T: FromStr>(&mut self, message: &str, invalid: &str) -> io::Result<Option<T>> {
        loop {
            self.ask(message)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "{invalid}")?,
            }
        }
    }

    /// Ask for a yes/no confirmation; anything but `y`/`yes` counts as no
    ///
    /// # Errors
    /// Propagates I/O errors from either stream
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        self.ask(message)?;
        Ok(self.read_line()?.is_some_and(|response| {
            let response = response.trim();
            response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
        }))
    }
}
