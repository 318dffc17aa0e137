//! Whitespace-delimited token reader
//!
//! Tokens may be spread over any number of lines, one per line or many per
//! line. The reader is refilled one line at a time. Lines are kept as raw bytes
//! and a token is only decoded as UTF-8 once it is consumed, so bytes that are
//! never read cannot fail a run.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::InputError;

/// Reads whitespace-separated tokens from a buffered source
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    /// Pending tokens of the current line, reversed so `pop` yields the next one
    buffer: Vec<Vec<u8>>,
    line: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    /// Create a scanner over a buffered reader
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line: Vec::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        self.next_raw()?
            .map(|raw| decode(raw, || "token".to_owned()))
            .transpose()
    }

    /// Next token parsed as `T`
    ///
    /// `what` names the expected value in the error if the token is missing or
    /// does not parse.
    pub fn parse_next<T: FromStr>(&mut self, what: &str) -> Result<T, InputError> {
        self.parse_next_with(|| what.to_owned())
    }

    /// Like [`Scanner::parse_next`], but the name is only built on error
    pub fn parse_next_with<T, F>(&mut self, what: F) -> Result<T, InputError>
    where
        T: FromStr,
        F: FnOnce() -> String,
    {
        let Some(raw) = self.next_raw()? else {
            return Err(InputError::eof(what()));
        };
        match std::str::from_utf8(&raw).ok().and_then(|token| token.parse().ok()) {
            Some(value) => Ok(value),
            None => Err(InputError::invalid(what(), String::from_utf8_lossy(&raw))),
        }
    }

    fn next_raw(&mut self) -> Result<Option<Vec<u8>>, InputError> {
        loop {
            if let Some(token) = self.buffer.pop() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.buffer = self
                .line
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
                .rev()
                .map(<[u8]>::to_vec)
                .collect();
        }
    }
}

fn decode(raw: Vec<u8>, what: impl FnOnce() -> String) -> Result<String, InputError> {
    String::from_utf8(raw)
        .map_err(|err| InputError::invalid(what(), String::from_utf8_lossy(err.as_bytes())))
}
