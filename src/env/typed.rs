// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed conversions for environment values.
//!
//! ```text
//! String  raw value verbatim
//! i32     strtoul(_, _, 0) scan: 0x/0 prefixes, trailing junk ignored,
//!         negatives rejected
//! f32/f64 full-string parse after leading whitespace
//! ```

mod private {
    pub trait Sealed {}
}

/// A type that can be produced from a raw environment value.
///
/// The set of implementors is closed: `String`, `i32`, `f32` and `f64`.
/// Requesting any other type through [`get_env`](super::get_env) is a
/// compile-time error, not a runtime one.
pub trait EnvValue: private::Sealed + Sized {
    /// Converts a non-empty raw value, falling back to `default` when
    /// the value does not represent a `Self`.
    fn from_env_str(raw: &str, default: Self) -> Self;
}

impl private::Sealed for String {}

impl EnvValue for String {
    fn from_env_str(raw: &str, _default: Self) -> Self {
        raw.to_owned()
    }
}

impl private::Sealed for i32 {}

impl EnvValue for i32 {
    fn from_env_str(raw: &str, default: Self) -> Self {
        parse_integer(raw).unwrap_or(default)
    }
}

impl private::Sealed for f32 {}

impl EnvValue for f32 {
    fn from_env_str(raw: &str, default: Self) -> Self {
        parse_full(raw).unwrap_or(default)
    }
}

impl private::Sealed for f64 {}

impl EnvValue for f64 {
    fn from_env_str(raw: &str, default: Self) -> Self {
        parse_full(raw).unwrap_or(default)
    }
}

/// Base-agnostic integer scan with `strtoul(_, _, 0)` semantics:
/// leading whitespace is skipped, `0x`/`0X` selects hex and a leading
/// `0` octal, the longest valid digit run wins and trailing junk is
/// ignored.
///
/// Deviations from raw strtoul, both deliberate: a negative value is
/// rejected instead of wrapping through unsigned, and a scan that
/// consumes no digits yields `None` so the caller's default applies.
pub(super) fn parse_integer(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s.starts_with('-') {
        return None;
    }

    let (digits, radix) = if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        (rest, 16)
    } else if s.starts_with('0') {
        // The leading zero itself is a valid octal digit.
        (s, 8)
    } else {
        (s, 10)
    };

    let mut value = 0i64;
    let mut consumed = 0usize;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        value = value
            .checked_mul(i64::from(radix))?
            .checked_add(i64::from(digit))?;
        if value > i64::from(i32::MAX) {
            return None;
        }
        consumed += 1;
    }

    if consumed == 0 {
        // A bare "0x" still consumed its leading zero, which scans as 0.
        return if radix == 16 { Some(0) } else { None };
    }

    i32::try_from(value).ok()
}

/// Floating-point parse matching the original strtof/strtod contract:
/// leading whitespace is skipped, but the remainder must be consumed in
/// full, so trailing non-numeric characters reject the value.
pub(super) fn parse_full<F: std::str::FromStr>(raw: &str) -> Option<F> {
    let s = raw.trim_start();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}
