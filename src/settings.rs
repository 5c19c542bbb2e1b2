// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! User settings.
//!
//! Settings are layered from three sources, where each later source overrides the earlier ones:
//!
//! 1. Built-in defaults.
//! 2. TOML settings file, `$XDG_CONFIG_HOME/dog/dog.toml` by default.
//! 3. Environment variables prefixed with `DOG_`, e.g., `DOG_TIMES=3`.

use crate::{path::settings_file, Error, Result};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Layered user settings.
///
/// # Invariants
///
/// - Settings produced by [`Settings::load`] never have `times` set to zero. Values built by hand
///   are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Number of times a trick is performed when not given on the command line.
    pub times: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { times: 1 }
    }
}

impl Settings {
    /// Load settings from defaults, settings file, and environment.
    ///
    /// If `path` is given, then that file is used in place of the default settings file, and it
    /// must exist. The default settings file is optional.
    ///
    /// # Errors
    ///
    /// - Return [`Error::NoWayConfig`] if default settings file path cannot be determined.
    /// - Return [`Error::Config`] if any source cannot be read or deserialized.
    /// - Return [`Error::InvalidTimes`] if final value of `times` is zero.
    #[instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (settings_file()?, false),
        };
        debug!("Layering settings file {path:?} (required: {required})");

        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("times", defaults.times as u64)?
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(Environment::with_prefix("DOG").try_parsing(true))
            .build()?
            .try_deserialize::<Settings>()?;

        if settings.times == 0 {
            return Err(Error::InvalidTimes);
        }

        Ok(settings)
    }
}
