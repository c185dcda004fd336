//! Line-oriented console used by every interactive step.
//!
//! Generic over the input and output streams so sessions can be driven from
//! in-memory buffers as well as stdin/stdout.

use std::io::{BufRead, Write};

use bikeshare_core::{BikeshareError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `text` as-is.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Show `prompt` and block for one line of input.
    ///
    /// Returns the line without surrounding whitespace, or
    /// [`BikeshareError::InputClosed`] once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Consume the console and hand back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether `answer` is exactly `expected`, ignoring case and surrounding
/// whitespace.
pub fn answer_is(answer: &str, expected: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(expected)
}
