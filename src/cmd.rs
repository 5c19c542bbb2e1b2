// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command set implementation.
//!
//! This module is the forward facing API of internal library. It is meant to be used in `main` of
//! the dog binary.

use crate::{
    model::{Dog, Trick},
    settings::Settings,
    Error, Result,
};

use clap::{Parser, Subcommand};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{debug, instrument};

/// Dog public command set CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "dog [options] <dog-command>",
    subcommand_help_heading = "Commands",
    version
)]
pub struct DogCli {
    /// Use this settings file instead of the default one.
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Command-set interfaces.
    #[command(subcommand)]
    pub command: Command,
}

impl DogCli {
    /// Run dog command based on given arguments, writing trick output to standard output.
    ///
    /// # Errors
    ///
    /// Will fail if settings cannot be loaded, or standard output cannot be written to.
    pub fn run(self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.run_with(&mut stdout)
    }

    /// Run dog command based on given arguments, writing trick output to given sink.
    ///
    /// # Errors
    ///
    /// Will fail if settings cannot be loaded, or sink cannot be written to.
    pub fn run_with(self, out: &mut impl Write) -> Result<()> {
        let settings = Settings::load(self.config.as_deref())?;
        match self.command {
            Command::Bark(opts) => run_tricks(&[Trick::Bark], opts.times, &settings, out),
            Command::Sit(opts) => run_tricks(&[Trick::Sit], opts.times, &settings, out),
            Command::Do(opts) => run_tricks(&opts.tricks, opts.times, &settings, out),
        }
    }
}

/// Full command-set of dog.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Tell the dog to bark.
    #[command(override_usage = "dog bark [options]")]
    Bark(TimesOptions),

    /// Tell the dog to sit.
    #[command(override_usage = "dog sit [options]")]
    Sit(TimesOptions),

    /// Tell the dog to perform a sequence of tricks.
    #[command(override_usage = "dog do [options] <trick>...")]
    Do(DoOptions),
}

/// Repeat a single trick.
#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
pub struct TimesOptions {
    /// Number of times to perform trick (defaults to settings).
    #[arg(short, long, value_name = "count")]
    pub times: Option<usize>,
}

/// Perform a sequence of tricks.
#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
pub struct DoOptions {
    /// Tricks to perform in order.
    #[arg(value_enum, required = true, num_args = 1.., value_delimiter = ',', value_name = "trick")]
    pub tricks: Vec<Trick>,

    /// Number of times to perform the whole sequence (defaults to settings).
    #[arg(short, long, value_name = "count")]
    pub times: Option<usize>,
}

#[instrument(skip(settings, out), level = "debug")]
fn run_tricks(
    tricks: &[Trick],
    times: Option<usize>,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    let times = times.unwrap_or(settings.times);
    if times == 0 {
        return Err(Error::InvalidTimes);
    }

    let dog = Dog::new();
    for round in 1..=times {
        debug!("Round {round} of {times}");
        for trick in tricks {
            dog.perform(*trick, out)?;
        }
    }

    Ok(())
}
