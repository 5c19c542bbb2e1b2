// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Cross-platform path manipulation.
//!
//! Provide basic utilities to determine important path data that the dog tool needs in order to
//! properly operate.

use crate::{Error, Result};

use std::path::PathBuf;

/// Get absolute path to dog's configuration directory.
///
/// # Errors
///
/// - Return [`Error::NoWayConfig`] if path to configuration directory cannot be determined.
///
/// [`Error::NoWayConfig`]: crate::Error::NoWayConfig
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|path| path.join("dog")).ok_or(Error::NoWayConfig)
}

/// Get absolute path to default settings file.
///
/// # Errors
///
/// - Return [`Error::NoWayConfig`] if path to configuration directory cannot be determined.
///
/// [`Error::NoWayConfig`]: crate::Error::NoWayConfig
pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|path| path.join("dog.toml"))
}
