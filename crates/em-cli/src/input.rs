//! Line-oriented prompting on top of any reader/writer pair.
//!
//! Every prompt reads exactly one line. Numbers that fail to parse are
//! reported and asked for again; they never abort the session.

use std::io::{self, BufRead, Write};

use em_core::truncate_chars;
use thiserror::Error;

/// Errors raised while reading interactive input.
#[derive(Debug, Error)]
pub enum InputError {
    /// A number was expected but the line did not contain one.
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Returns true if `err` (or anything it wraps) is end of input.
    pub fn is_closed(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<Self>(), Some(Self::Closed))
    }
}

/// Parses a cost. Only finite values are accepted.
pub fn parse_cost(line: &str) -> Result<f32, InputError> {
    let trimmed = line.trim();
    match trimmed.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            input: trimmed.to_string(),
        }),
    }
}

/// A y/n answer is affirmative when it starts with `y` or `Y`.
pub fn is_affirmative(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Interactive console: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for regular (non-prompt) output.
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line, without the trailing newline and
    /// surrounding whitespace.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Reads a non-blank line of at most `limit` characters.
    ///
    /// Blank lines are skipped by asking again. Longer values are cut to the
    /// limit.
    pub fn prompt_text(
        &mut self,
        prompt: &str,
        field: &'static str,
        limit: usize,
    ) -> Result<String, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            if line.is_empty() {
                continue;
            }
            let (kept, truncated) = truncate_chars(&line, limit);
            if truncated {
                tracing::warn!(field, limit, "input truncated");
            }
            return Ok(kept.to_string());
        }
    }

    /// Reads a cost, asking again until the line holds a valid number.
    pub fn prompt_cost(&mut self, prompt: &str) -> Result<f32, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_cost(&line) {
                Ok(cost) => return Ok(cost),
                Err(err @ InputError::InvalidNumber { .. }) => {
                    tracing::debug!(%err, "reprompting");
                    writeln!(self.output, "Invalid number, please try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Asks a y/n question.
    pub fn prompt_yes(&mut self, prompt: &str) -> Result<bool, InputError> {
        self.prompt_line(prompt).map(|line| is_affirmative(&line))
    }
}
