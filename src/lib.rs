// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Internal library for the dog tool.
//!
//! Provides a [`Dog`] that knows exactly two tricks: it can bark, and it can sit. Each trick
//! writes one fixed line to standard output:
//!
//! - [`Dog::bark`] writes `Woof!`.
//! - [`Dog::sit`] writes `The dog is sitting.`
//!
//! The `dog` binary wraps this library in a small command set, see [`cmd`].
//!
//! [`Dog`]: crate::model::Dog
//! [`Dog::bark`]: crate::model::Dog::bark
//! [`Dog::sit`]: crate::model::Dog::sit

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]

pub mod cmd;
pub mod model;
pub mod path;
pub mod settings;


/// All possible error variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read or write a stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to layer or deserialize settings.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Path to configuration directory cannot be determined.
    #[error("Cannot determine path to configuration directory")]
    NoWayConfig,

    /// Trick repeat count was zero.
    #[error("Number of times to perform a trick must be at least 1")]
    InvalidTimes,
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Map an error to a sysexits(3) style exit status.
///
/// Anything that is not one of our own [`Error`] variants is treated as an internal software
/// error.
pub fn exit_status_from_error(error: anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Io(_)) => exitcode::IOERR,
        Some(Error::Config(_) | Error::NoWayConfig | Error::InvalidTimes) => exitcode::CONFIG,
        None => exitcode::SOFTWARE,
    }
}
