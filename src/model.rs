// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Data model types.
//!
//! Contains the [`Dog`] entity, and the [`Trick`] set it can perform.

use crate::Result;

use std::{
    fmt,
    io::{self, Write},
};
use tracing::{error, instrument};

/// A good dog.
///
/// Holds no state. Every instance behaves the same, and nothing one instance does can affect
/// another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dog;

impl Dog {
    /// Construct new dog.
    pub fn new() -> Self {
        Dog
    }

    /// Write "Woof!" to standard output.
    pub fn bark(&self) {
        self.perform_to_stdout(Trick::Bark);
    }

    /// Write "The dog is sitting." to standard output.
    pub fn sit(&self) {
        self.perform_to_stdout(Trick::Sit);
    }

    /// Perform trick into given sink.
    ///
    /// Writes the phrase of the trick followed by a single line feed, then flushes.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Io`] if sink cannot be written to or flushed.
    ///
    /// [`Error::Io`]: crate::Error::Io
    #[instrument(skip(self, out), level = "debug")]
    pub fn perform(&self, trick: Trick, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{trick}")?;
        out.flush()?;
        Ok(())
    }

    fn perform_to_stdout(&self, trick: Trick) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = self.perform(trick, &mut stdout) {
            error!("Failed to {trick:?}: {err}");
        }
    }
}

/// Everything a [`Dog`] knows how to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Trick {
    /// Say "Woof!".
    Bark,

    /// Say "The dog is sitting.".
    Sit,
}

impl Trick {
    /// Fixed phrase written when trick is performed, without line break.
    pub fn phrase(&self) -> &'static str {
        match self {
            Trick::Bark => "Woof!",
            Trick::Sit => "The dog is sitting.",
        }
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.phrase())
    }
}
