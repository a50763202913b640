// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable access.
//!
//! # Architecture
//!
//! ```text
//! set_env(name, value)   validate non-empty -> platform::set_var
//! unset_env(name)        platform::unset_var (idempotent removal)
//! get_env::<T>(name, d)  platform::get_var -> typed conversion
//!                        T in {String, i32, f32, f64} (sealed)
//! ```
//!
//! The typed getter never reports an error: a missing variable or an
//! unparsable value degrades to the caller-supplied default. It is
//! meant for best-effort configuration reads, not validation pipelines.

mod typed;


pub use typed::EnvValue;

use crate::error::{EnvError, EnvResult};
use crate::platform;

/// Sets an environment variable in the calling process.
///
/// Both `name` and `value` must be non-empty. This is deliberately
/// stricter than POSIX: an empty value cannot be set through this API
/// even where the underlying OS would allow it.
///
/// # Errors
///
/// Returns [`EnvError::InvalidArguments`] when `name` or `value` is
/// empty, and [`EnvError::SetEnvironmentFailed`] when the OS call
/// reports failure.
pub fn set_env(name: &str, value: &str) -> EnvResult<()> {
    if name.is_empty() || value.is_empty() {
        return Err(EnvError::invalid_arguments(
            "environment variable name and value must be non-empty",
        ));
    }

    platform::set_var(name, value).map_err(|source| EnvError::set_failed(name, source))?;
    tracing::trace!(name, "set environment variable");
    Ok(())
}

/// Removes an environment variable from the calling process.
///
/// Unsetting a variable that was never set succeeds.
///
/// # Errors
///
/// Returns [`EnvError::UnsetEnvironmentFailed`] when the OS call
/// reports failure.
pub fn unset_env(name: &str) -> EnvResult<()> {
    platform::unset_var(name).map_err(|source| EnvError::unset_failed(name, source))?;
    tracing::trace!(name, "unset environment variable");
    Ok(())
}

/// Reads an environment variable, converting it to the requested type.
///
/// Returns `default` when the variable is absent, empty, or its value
/// does not convert to `T`. The supported types are `String`, `i32`,
/// `f32` and `f64`; anything else is rejected at compile time.
///
/// Note the integer narrowing carried over from the original library:
/// a negative value such as `"-5"` returns the default, not `-5`.
#[must_use]
pub fn get_env<T: EnvValue>(name: &str, default: T) -> T {
    let raw = platform::get_var(name);
    if raw.is_empty() {
        return default;
    }
    T::from_env_str(&raw, default)
}
