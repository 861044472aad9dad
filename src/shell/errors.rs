// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for reading a query.

use std::{fmt, io};

/// Errors that can occur before a query reaches the pipeline.
///
/// Once a query is parsed, answering it cannot fail.
#[derive(Debug)]
pub enum QueryError {
    /// Reading stdin or writing stdout failed.
    Io(io::Error),

    /// Input ended before a number was entered.
    Empty,

    /// Input was not an integer.
    NotANumber { input: String },

    /// Places are counted from 1; anything below the batch sentinel has no
    /// meaning.
    NegativePosition { input: i64 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Io(err) => write!(f, "I/O error: {}", err),
            QueryError::Empty => write!(f, "No place entered"),
            QueryError::NotANumber { input } => {
                write!(f, "Place must be a whole number, got {:?}", input)
            }
            QueryError::NegativePosition { input } => {
                write!(f, "Place must be 1 or more (or 0 for the table), got {}", input)
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for QueryError {
    fn from(err: io::Error) -> Self {
        QueryError::Io(err)
    }
}
