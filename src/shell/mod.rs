// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive shell.
//!
//! Prompts for a 1-indexed place, reads one integer and prints who is there.
//! Entering the batch sentinel (0) prints a table for the first hundred
//! 0-indexed positions instead.
//!
//! The shell is generic over its reader and writer so tests can drive it
//! with in-memory buffers.
//!
//! # Example
//!
//! ```
//! use double_cola::{Shell, ShellConfig};
//!
//! let shell = Shell::new(ShellConfig::default());
//! let mut out = Vec::new();
//! shell.run(&b"1\n"[..], &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("Answer: 0 (c = 1; k = 0; Sheldon)\n"));
//! ```

pub mod errors;

pub use errors::QueryError;

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::queue::constants::{BATCH_SENTINEL, DEFAULT_BATCH_ROWS, PROMPT};
use crate::resolver::{answer, Answer};

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Input value that selects batch mode.
    pub batch_sentinel: i64,

    /// Rows printed in batch mode.
    pub batch_rows: u64,

    /// Prompt written before reading input.
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            batch_sentinel: BATCH_SENTINEL,
            batch_rows: DEFAULT_BATCH_ROWS,
            prompt: PROMPT.to_string(),
        }
    }
}

/// A parsed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Print the table for positions `0..batch_rows`.
    Batch,

    /// Answer a single 0-indexed position.
    Single(u64),
}

impl Query {
    /// Interpret a 1-indexed place typed by the user.
    pub fn from_place(place: i64, config: &ShellConfig) -> Result<Query, QueryError> {
        if place == config.batch_sentinel {
            return Ok(Query::Batch);
        }
        if place < 1 {
            return Err(QueryError::NegativePosition { input: place });
        }
        Ok(Query::Single(place as u64 - 1))
    }

    /// Parse one line of input.
    pub fn parse(line: &str, config: &ShellConfig) -> Result<Query, QueryError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        let place = trimmed
            .parse::<i64>()
            .map_err(|_| QueryError::NotANumber {
                input: trimmed.to_string(),
            })?;
        Query::from_place(place, config)
    }
}

/// The prompt-read-print loop (one iteration of it).
#[derive(Debug, Clone, Default)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Shell { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Write the prompt and read one query.
    pub fn read_query<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<Query, QueryError> {
        write!(writer, "{}", self.config.prompt)?;
        writer.flush()?;

        let mut line = String::new();
        reader.read_line(&mut line)?;
        let query = Query::parse(&line, &self.config)?;
        debug!("Read query {:?}", query);
        Ok(query)
    }

    /// Prompt, read, and answer. Returns the query that was answered.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<Query, QueryError> {
        let query = self.read_query(reader, writer)?;
        self.run_query(query, writer)?;
        Ok(query)
    }

    /// Answer an already-parsed query.
    pub fn run_query<W: Write>(&self, query: Query, writer: &mut W) -> Result<(), QueryError> {
        match query {
            Query::Batch => {
                info!("Printing table of {} positions", self.config.batch_rows);
                for (n, row) in self.batch() {
                    writeln!(writer, "{}  ->  {}", n, row)?;
                }
            }
            Query::Single(n) => {
                info!("Answering position {}", n);
                writeln!(writer)?;
                writeln!(writer, "Answer: {}", answer(n))?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Rows of the batch table: 0-indexed position and its answer.
    pub fn batch(&self) -> impl Iterator<Item = (u64, Answer)> {
        (0..self.config.batch_rows).map(|n| (n, answer(n)))
    }
}
