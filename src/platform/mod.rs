// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform environment accessor.
//!
//! # Architecture
//!
//! ```text
//! get_var / set_var / unset_var
//!            |
//!     cfg-selected backend
//!     |                  |
//!     v                  v
//!   unix               windows
//!   libc getenv/       GetEnvironmentVariableW/
//!   setenv/unsetenv    SetEnvironmentVariableW
//!   CString boundary   UTF-8 <-> UTF-16 per call
//! ```
//!
//! Callers depend only on the three functions here; the backends are an
//! implementation detail. No argument validation happens at this layer
//! beyond what the OS calls themselves require.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
use unix as imp;
#[cfg(windows)]
use windows as imp;


/// Reads a variable from the process environment table.
///
/// Returns an empty string when the variable is absent or the platform
/// call fails; absent and empty-valued variables are indistinguishable
/// through this interface. Names the OS cannot represent (empty,
/// containing `=` or NUL) also yield an empty string.
#[must_use]
pub(crate) fn get_var(name: &str) -> String {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return String::new();
    }
    imp::get_var(name)
}

/// Writes a `name=value` pair into the process environment table.
pub(crate) fn set_var(name: &str, value: &str) -> std::io::Result<()> {
    imp::set_var(name, value)
}

/// Removes a variable from the process environment table.
///
/// Removing a variable that is not present succeeds on every backend.
pub(crate) fn unset_var(name: &str) -> std::io::Result<()> {
    imp::unset_var(name)
}

/// Serializes unit tests that touch the process environment.
///
/// The environment table is process-global and the harness runs tests on
/// multiple threads, so every test that reads or writes it must hold
/// this guard for its full duration.
#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
