// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvError, EnvResult};
use std::error::Error as _;
use std::path::Path;

#[test]
fn test_invalid_arguments_display() {
    let err = EnvError::invalid_arguments("environment variable name and value must be non-empty");
    insta::assert_snapshot!(
        err.to_string(),
        @"one or more arguments are invalid: environment variable name and value must be non-empty"
    );
}

#[test]
fn test_set_failed_display() {
    let err = EnvError::set_failed(
        "SOME_VAR",
        std::io::Error::from(std::io::ErrorKind::InvalidInput),
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to set the environment variable 'SOME_VAR'"
    );
}

#[test]
fn test_unset_failed_display() {
    let err = EnvError::unset_failed(
        "SOME_VAR",
        std::io::Error::from(std::io::ErrorKind::InvalidInput),
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to unset the environment variable 'SOME_VAR'"
    );
}

#[test]
fn test_parsing_failed_display() {
    let err = EnvError::parsing_failed(Path::new("bad.env"), "line 3: missing '=' delimiter");
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to parse the env file 'bad.env': line 3: missing '=' delimiter"
    );
}

#[test]
fn test_os_failures_carry_source() {
    let err = EnvError::set_failed(
        "SOME_VAR",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let source = err.source().expect("set failure should chain its io error");
    assert!(source.to_string().contains("permission denied"));
}

#[test]
fn test_env_error_size() {
    // Largest variant holds two Box<str> (16 bytes each) plus the
    // discriminant, padded to 40 bytes.
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 40, "EnvError is {size} bytes, expected <= 40");
}

#[test]
fn test_env_result_size() {
    let size = std::mem::size_of::<EnvResult<()>>();
    assert!(size <= 40, "EnvResult<()> is {size} bytes, expected <= 40");
}
