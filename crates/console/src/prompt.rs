//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `prompt` on the current line and read the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until the answer is an integer that `accept` allows.
    ///
    /// After a bad answer `retry` is shown instead of `prompt`.
    pub fn ask_int<'p>(
        &mut self,
        prompt: &'p str,
        retry: &'p str,
        accept: impl Fn(i64) -> bool,
    ) -> io::Result<Option<i64>> {
        let mut current = prompt;
        loop {
            let Some(answer) = self.ask(current)? else {
                return Ok(None);
            };
            match answer.trim().parse::<i64>() {
                Ok(value) if accept(value) => return Ok(Some(value)),
                _ => current = retry,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
