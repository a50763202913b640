// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unix backend built on the libc environment calls.
//!
//! Values cross the FFI boundary as NUL-terminated byte strings; they
//! are copied out of `environ` immediately and converted to UTF-8
//! lossily, so no pointer into the environment table outlives a call.

use std::ffi::{CStr, CString};
use std::io;

pub(super) fn get_var(name: &str) -> String {
    let Ok(cname) = CString::new(name) else {
        return String::new();
    };

    // SAFETY: `cname` is a valid NUL-terminated string. The returned
    // pointer aliases `environ`; the bytes are copied before this
    // function returns, and concurrent writers are excluded by the
    // crate's documented single-threaded usage contract.
    let ptr = unsafe { libc::getenv(cname.as_ptr()) };
    if ptr.is_null() {
        return String::new();
    }

    // SAFETY: a non-null getenv result points at a NUL-terminated string.
    let bytes = unsafe { CStr::from_ptr(ptr) }.to_bytes();
    String::from_utf8_lossy(bytes).into_owned()
}

pub(super) fn set_var(name: &str, value: &str) -> io::Result<()> {
    let cname = cstring(name)?;
    let cvalue = cstring(value)?;

    // SAFETY: both pointers are valid NUL-terminated strings for the
    // duration of the call; setenv copies them into the table.
    let rc = unsafe { libc::setenv(cname.as_ptr(), cvalue.as_ptr(), 1) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

pub(super) fn unset_var(name: &str) -> io::Result<()> {
    let cname = cstring(name)?;

    // POSIX unsetenv reports success for names that are not present,
    // which gives the idempotent removal this crate promises.
    // SAFETY: `cname` is a valid NUL-terminated string.
    let rc = unsafe { libc::unsetenv(cname.as_ptr()) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

fn cstring(text: &str) -> io::Result<CString> {
    CString::new(text).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))
}
