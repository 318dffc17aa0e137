//! Errors raised while reading the temperature input

use thiserror::Error;

/// Errors that can occur while reading the count and the readings
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended where another token was required
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the missing token should have been
        expected: String,
    },

    /// A token could not be parsed as the required integer
    #[error("invalid {what}: {token:?}")]
    Invalid {
        /// What the token was supposed to be
        what: String,
        /// The offending token
        token: String,
    },

    /// Reading from the underlying source failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Create an end-of-input error
    #[must_use]
    pub fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Create an invalid-token error
    #[must_use]
    pub fn invalid(what: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Invalid {
            what: what.into(),
            token: token.into(),
        }
    }
}
