// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!            +--------+--------+
//!            v                 v
//!        cli (clap)       cmd (handlers)
//!            |         get / set / unset / load
//!            +--------+--------+
//!                     v
//!          ,---------------------,
//!          |       loader        |
//!          |   KEY=VALUE lines   |
//!          '----------+----------'
//!                     v
//!          ,---------------------,
//!          |         env         |
//!          | typed get, set/unset|
//!          '----------+----------'
//!                     v
//!          ,---------------------,
//!          |      platform       |
//!          | unix libc / Win32 W |
//!          '---------------------'
//!
//!   +------------------------------------+
//!   |  foundation     error, logging     |
//!   +------------------------------------+
//! ```
//!
//! # Thread Safety
//!
//! The process environment table is global mutable state, and the
//! underlying OS calls are not guaranteed to be thread-safe on every
//! platform. This crate performs no internal locking: callers that touch
//! the environment from more than one thread must serialize every call
//! into this crate behind an external mutex or a single-threaded owner.

pub mod cli;
pub mod cmd;
pub mod env;
pub mod error;
pub mod loader;
pub mod logging;
pub(crate) mod platform;

pub use env::{EnvValue, get_env, set_env, unset_env};
pub use error::{EnvError, EnvResult};
pub use loader::load_env_file;
