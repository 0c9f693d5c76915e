//! Line-oriented console over any buffered reader and writer
//!
//! Prompts are written without a newline and flushed immediately so they are
//! visible before the following blocking read. Messages are written as whole
//! lines. Reads return `None` once the input is exhausted.

use crate::errors::InsaError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` as-is and flush
    pub fn prompt(&mut self, text: &str) -> Result<(), InsaError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write `text` followed by a newline
    pub fn say(&mut self, text: &str) -> Result<(), InsaError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with its terminator removed.
    ///
    /// Both `\n` and `\r\n` terminators are stripped; no other trimming is
    /// applied. Invalid UTF-8 is decoded lossily.
    pub fn read_line(&mut self) -> Result<Option<String>, InsaError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
