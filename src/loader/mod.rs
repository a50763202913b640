// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file loader.
//!
//! # File Format
//!
//! ```text
//! KEY1=VALUE1
//! KEY2=VALUE2
//! ```
//!
//! One declaration per line. The first `=` is the sole delimiter; the
//! value may be empty and may contain further `=` characters, which are
//! preserved verbatim. There is no comment syntax, no quoting or
//! escaping, no blank-line skip and no whitespace trimming; callers
//! needing any of these must pre-process the file.

use crate::env::set_env;
use crate::error::{EnvError, EnvResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Applies every `KEY=VALUE` declaration in the file to the process
/// environment, line by line, in file order.
///
/// Processing stops at the first failure: lines before it remain
/// applied (partial application is expected), lines after it are never
/// touched. A line without a `=` delimiter is malformed and fails the
/// load with its line number rather than silently attempting to set an
/// empty-named variable.
///
/// # Errors
///
/// Returns [`EnvError::ParsingEnvFileFailed`] when the file cannot be
/// opened or read, or when a line has no `=` delimiter; propagates the
/// [`set_env`] error for the offending line otherwise.
pub fn load_env_file(path: impl AsRef<Path>) -> EnvResult<()> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| EnvError::parsing_failed(path, format!("cannot open for reading: {e}")))?;
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            EnvError::parsing_failed(path, format!("read failed at line {line_number}: {e}"))
        })?;
        // lines() strips the `\n` but keeps the `\r` of a CRLF file
        // read on a platform with LF line endings.
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvError::parsing_failed(
                path,
                format!("line {line_number}: missing '=' delimiter"),
            ));
        };

        set_env(key, value)?;
        tracing::trace!(key, line = line_number, "applied env file entry");
    }

    tracing::debug!(path = %path.display(), "loaded env file");
    Ok(())
}
