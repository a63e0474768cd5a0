//! `prompt`
//!
//! Talking to the person at the keyboard.

use std::io::{self, BufRead, Write};

/// A console the operator reads from and types into.
pub struct Operator<R, W> {
    /// Where answers come from.
    input: R,
    /// Where messages go.
    output: W,
}

impl Operator<io::StdinLock<'static>, io::Stdout> {
    /// The process's own terminal.
    pub fn console() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Operator<R, W> {
    /// An operator over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a line.
    ///
    /// # Errors
    /// Any error writing to the output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints `question` without a newline and reads one trimmed line back.
    ///
    /// End of input reads as an empty answer.
    ///
    /// # Errors
    /// Any error writing the question or reading the answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    /// Blocks until the operator presses Enter.
    ///
    /// # Errors
    /// Any error writing the message or reading input.
    pub fn wait_for_enter(&mut self, message: &str) -> io::Result<()> {
        self.ask(message).map(|_| ())
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
