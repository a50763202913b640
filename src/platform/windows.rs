// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows backend built on the wide-character Win32 environment calls.
//!
//! The native table stores UTF-16, so every call transcodes: UTF-8 in,
//! UTF-16 to the API, UTF-16 back out, lossy UTF-8 to the caller. A
//! zero-length native buffer yields an empty result rather than an
//! error.

use std::io;
use windows::Win32::Foundation::ERROR_ENVVAR_NOT_FOUND;
use windows::Win32::System::Environment::{GetEnvironmentVariableW, SetEnvironmentVariableW};
use windows::core::PCWSTR;

pub(super) fn get_var(name: &str) -> String {
    let wname = to_wide(name);
    let name_ptr = PCWSTR::from_raw(wname.as_ptr());

    // SAFETY: `wname` is NUL-terminated and outlives both calls.
    let needed = unsafe { GetEnvironmentVariableW(name_ptr, None) };
    if needed == 0 {
        return String::new();
    }

    // `needed` counts the terminating NUL on the size query.
    let mut buffer = vec![0u16; needed as usize];

    // SAFETY: `buffer` is writable for `needed` u16 units.
    let written = unsafe { GetEnvironmentVariableW(name_ptr, Some(&mut buffer)) };
    if written == 0 || written as usize >= buffer.len() {
        // The variable vanished or grew between the two calls.
        return String::new();
    }

    buffer.truncate(written as usize);
    String::from_utf16_lossy(&buffer)
}

pub(super) fn set_var(name: &str, value: &str) -> io::Result<()> {
    let wname = to_wide(name);
    let wvalue = to_wide(value);

    // SAFETY: both buffers are NUL-terminated and outlive the call.
    unsafe {
        SetEnvironmentVariableW(
            PCWSTR::from_raw(wname.as_ptr()),
            PCWSTR::from_raw(wvalue.as_ptr()),
        )
    }
    .map_err(io::Error::other)
}

pub(super) fn unset_var(name: &str) -> io::Result<()> {
    let wname = to_wide(name);

    // SAFETY: `wname` is NUL-terminated; a null value pointer deletes.
    let result = unsafe { SetEnvironmentVariableW(PCWSTR::from_raw(wname.as_ptr()), PCWSTR::null()) };
    match result {
        Ok(()) => Ok(()),
        // Deleting a variable that is not present is idempotent here.
        Err(e) if e.code() == ERROR_ENVVAR_NOT_FOUND.to_hresult() => Ok(()),
        Err(e) => Err(io::Error::other(e)),
    }
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
