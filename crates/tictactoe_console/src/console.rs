//! Line-oriented terminal abstraction.

use std::io::{self, BufRead, Write};

/// A terminal that can be written to and read line by line.
///
/// Players and the session talk to the user only through this trait, so the
/// whole game can run against in-memory buffers.
pub trait Terminal: Write {
    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input has reached end-of-file.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`Terminal`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W> {
    /// Creates a console from a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        // Prompts are written without a newline
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
