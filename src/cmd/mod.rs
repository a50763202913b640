// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   get, set, unset, load
//! ```
//!
//! Handlers print results to stdout and leave error reporting to the
//! caller; the library layers underneath never print on their own.

use crate::cli::{GetArgs, LoadArgs, SetArgs, UnsetArgs, ValueType};
use crate::env::{get_env, set_env, unset_env};
use crate::error::Result;
use crate::loader::load_env_file;


/// Main handler for the get command.
///
/// # Errors
///
/// Returns an error if the `--default` value does not parse as the
/// requested type.
pub fn run_get_command(args: &GetArgs) -> Result<()> {
    match args.value_type {
        ValueType::String => {
            let default = args.default.clone().unwrap_or_default();
            println!("{}", get_env(&args.name, default));
        }
        ValueType::Int => {
            let default: i32 = parsed_default(args)?;
            println!("{}", get_env(&args.name, default));
        }
        ValueType::Float => {
            let default: f32 = parsed_default(args)?;
            println!("{}", get_env(&args.name, default));
        }
        ValueType::Double => {
            let default: f64 = parsed_default(args)?;
            println!("{}", get_env(&args.name, default));
        }
    }
    Ok(())
}

/// Main handler for the set command.
///
/// # Errors
///
/// Returns an error if the arguments are empty or the OS call fails.
pub fn run_set_command(args: &SetArgs) -> Result<()> {
    set_env(&args.name, &args.value)?;
    Ok(())
}

/// Main handler for the unset command.
///
/// # Errors
///
/// Returns an error if the OS call fails.
pub fn run_unset_command(args: &UnsetArgs) -> Result<()> {
    unset_env(&args.name)?;
    Ok(())
}

/// Main handler for the load command.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or a line cannot be
/// applied.
pub fn run_load_command(args: &LoadArgs) -> Result<()> {
    load_env_file(&args.path)?;
    Ok(())
}

fn parsed_default<T>(args: &GetArgs) -> Result<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match &args.default {
        None => Ok(T::default()),
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid --default value '{raw}': {e}")),
    }
}
