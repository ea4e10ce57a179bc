//! Sources for the one interactive answer the walkthrough needs

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Supplies a word when a lesson asks for one
pub trait WordSource {
    fn read_word(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on stderr and reads one line from stdin.
///
/// The prompt goes to stderr so `--json` output on stdout stays parseable.
pub struct StdinSource<R = io::StdinLock<'static>> {
    reader: R,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> WordSource for StdinSource<R> {
    fn read_word(&mut self, prompt: &str) -> Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", prompt)?;
        stderr.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "EOF when reading a line",
            )
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// A word decided up front, from `--word` or a test
#[derive(Debug, Clone)]
pub struct FixedWord(pub String);

impl WordSource for FixedWord {
    fn read_word(&mut self, prompt: &str) -> Result<String> {
        tracing::debug!(prompt, word = %self.0, "answering prompt with preset word");
        Ok(self.0.clone())
    }
}
