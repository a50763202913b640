// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::load_env_file;
use crate::env::{get_env, unset_env};
use crate::error::EnvError;
use crate::platform::env_test_lock;
use std::io::Write;
use tempfile::NamedTempFile;

fn env_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp env file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp env file");
    file
}

#[test]
fn test_load_well_formed_file() {
    let _guard = env_test_lock();

    let file = env_file(
        "CPPENV_LOAD_INTEGER=123\n\
         CPPENV_LOAD_FLOAT=123.123\n\
         CPPENV_LOAD_DOUBLE=123.123456789\n\
         CPPENV_LOAD_STRING=some_string\n\
         CPPENV_LOAD_SPACED=string with spaces\n",
    );

    load_env_file(file.path()).unwrap();

    assert_eq!(get_env("CPPENV_LOAD_INTEGER", 0), 123);
    let float: f32 = get_env("CPPENV_LOAD_FLOAT", 0.0f32);
    assert!((float - 123.123f32).abs() < f32::EPSILON * 256.0);
    let double: f64 = get_env("CPPENV_LOAD_DOUBLE", 0.0f64);
    assert!((double - 123.123_456_789f64).abs() < 1e-9);
    assert_eq!(get_env("CPPENV_LOAD_STRING", String::new()), "some_string");
    assert_eq!(
        get_env("CPPENV_LOAD_SPACED", String::new()),
        "string with spaces"
    );

    for name in [
        "CPPENV_LOAD_INTEGER",
        "CPPENV_LOAD_FLOAT",
        "CPPENV_LOAD_DOUBLE",
        "CPPENV_LOAD_STRING",
        "CPPENV_LOAD_SPACED",
    ] {
        unset_env(name).unwrap();
    }
}

#[test]
fn test_load_crlf_file() {
    let _guard = env_test_lock();

    let file = env_file("CPPENV_LOAD_CRLF_A=1\r\nCPPENV_LOAD_CRLF_B=2\r\n");
    load_env_file(file.path()).unwrap();

    assert_eq!(get_env("CPPENV_LOAD_CRLF_A", 0), 1);
    assert_eq!(get_env("CPPENV_LOAD_CRLF_B", 0), 2);

    unset_env("CPPENV_LOAD_CRLF_A").unwrap();
    unset_env("CPPENV_LOAD_CRLF_B").unwrap();
}

#[test]
fn test_value_keeps_extra_equals() {
    let _guard = env_test_lock();

    // Only the first `=` delimits; the rest belong to the value.
    let file = env_file("CPPENV_LOAD_EQUALS=a=b=c\n");
    load_env_file(file.path()).unwrap();

    assert_eq!(get_env("CPPENV_LOAD_EQUALS", String::new()), "a=b=c");

    unset_env("CPPENV_LOAD_EQUALS").unwrap();
}

#[test]
fn test_nonexistent_path_fails_without_side_effects() {
    let _guard = env_test_lock();

    let err = load_env_file("definitely/not/a/real.env").unwrap_err();
    assert!(matches!(err, EnvError::ParsingEnvFileFailed { .. }));
}

#[test]
fn test_missing_delimiter_fails_with_line_number() {
    let _guard = env_test_lock();

    let file = env_file("CPPENV_LOAD_FIRST=ok\nthis line has no delimiter\nCPPENV_LOAD_LAST=no\n");
    let err = load_env_file(file.path()).unwrap_err();

    match err {
        EnvError::ParsingEnvFileFailed { message, .. } => {
            assert!(
                message.contains("line 2") && message.contains("missing '='"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected ParsingEnvFileFailed, got {other:?}"),
    }

    // Lines before the failure are applied, lines after it are not.
    assert_eq!(get_env("CPPENV_LOAD_FIRST", String::new()), "ok");
    assert_eq!(get_env("CPPENV_LOAD_LAST", String::new()), "");

    unset_env("CPPENV_LOAD_FIRST").unwrap();
}

#[test]
fn test_empty_value_aborts_load() {
    let _guard = env_test_lock();

    // `KEY=` tokenizes to an empty value, which set_env rejects.
    let file = env_file("CPPENV_LOAD_BEFORE=1\nCPPENV_LOAD_EMPTY=\nCPPENV_LOAD_AFTER=2\n");
    let err = load_env_file(file.path()).unwrap_err();
    assert!(matches!(err, EnvError::InvalidArguments(_)));

    assert_eq!(get_env("CPPENV_LOAD_BEFORE", 0), 1);
    assert_eq!(get_env("CPPENV_LOAD_AFTER", 0), 0);

    unset_env("CPPENV_LOAD_BEFORE").unwrap();
}

#[test]
fn test_blank_line_is_malformed() {
    let _guard = env_test_lock();

    // The format has no blank-line skip; a blank line has no `=`.
    let file = env_file("CPPENV_LOAD_BLANK=1\n\nCPPENV_LOAD_IGNORED=2\n");
    let err = load_env_file(file.path()).unwrap_err();
    assert!(matches!(err, EnvError::ParsingEnvFileFailed { .. }));

    unset_env("CPPENV_LOAD_BLANK").unwrap();
}
