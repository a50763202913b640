// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvError (closed set, ~40 bytes)
//!                        |
//!     +---------+--------+-----------+
//!     v         v        v           v
//! InvalidArgs  Set     Unset     ParsingEnvFile
//! Box<str>   +io src  +io src    path + message
//!
//! OS-level failures carry their io::Error as #[source]; string
//! payloads are boxed to keep the enum small.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by the CLI layer.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Errors produced by the environment accessor and the env file loader.
///
/// The set is closed: every fallible operation in this crate reports one
/// of these variants to its direct caller, with no retry and no partial
/// success reporting beyond "processing stopped at the first failure".
#[derive(Debug, Error)]
pub enum EnvError {
    /// Empty name or value passed to [`set_env`](crate::env::set_env).
    #[error("one or more arguments are invalid: {0}")]
    InvalidArguments(Box<str>),

    /// The OS-level set call failed.
    #[error("failed to set the environment variable '{name}'")]
    SetEnvironmentFailed {
        name: Box<str>,
        #[source]
        source: std::io::Error,
    },

    /// The OS-level unset call failed.
    #[error("failed to unset the environment variable '{name}'")]
    UnsetEnvironmentFailed {
        name: Box<str>,
        #[source]
        source: std::io::Error,
    },

    /// The env file could not be opened, read, or contained a line
    /// without a `=` delimiter.
    #[error("failed to parse the env file '{path}': {message}")]
    ParsingEnvFileFailed { path: Box<str>, message: Box<str> },
}

impl EnvError {
    pub(crate) fn invalid_arguments(message: impl Into<Box<str>>) -> Self {
        Self::InvalidArguments(message.into())
    }

    pub(crate) fn set_failed(name: &str, source: std::io::Error) -> Self {
        Self::SetEnvironmentFailed {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn unset_failed(name: &str, source: std::io::Error) -> Self {
        Self::UnsetEnvironmentFailed {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn parsing_failed(path: &std::path::Path, message: impl Into<Box<str>>) -> Self {
        Self::ParsingEnvFileFailed {
            path: path.display().to_string().into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests;
