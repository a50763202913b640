// cppenv-rs: Cross-Platform Environment Variables - Rust Port
//
// SPDX-FileCopyrightText: 2026 cppenv-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for cppenv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! cppenv [global options] <command>
//! get <NAME> [--as TYPE] [--default VALUE]
//! set <NAME> <VALUE>
//! unset <NAME>
//! load <FILE>
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cross-Platform Environment Variables - Rust Port
///
/// A diagnostic front end for the cppenv library. Note that `set`,
/// `unset` and `load` mutate only the environment of the `cppenv`
/// process itself; they cannot reach the parent shell.
#[derive(Debug, Parser)]
#[command(
    name = "cppenv",
    author,
    version,
    about = "Cross-platform environment variable tool",
    long_about = "cppenv-rs Copyright (C) 2026 cppenv-rs contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads, sets, unsets and bulk-loads process environment\n\
                  variables from a one-line-per-variable KEY=VALUE file. All\n\
                  mutations affect only the cppenv process itself. See\n\
                  `cppenv <command> --help` for more information about a command."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Reads an environment variable and prints it.
    Get(GetArgs),

    /// Sets an environment variable in this process.
    Set(SetArgs),

    /// Unsets an environment variable in this process.
    Unset(UnsetArgs),

    /// Loads every KEY=VALUE line of an env file into this process.
    Load(LoadArgs),
}

/// Arguments for the `get` command.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Name of the environment variable to read.
    pub name: String,

    /// Type used to interpret the value.
    #[arg(long = "as", value_name = "TYPE", value_enum, default_value_t = ValueType::String)]
    pub value_type: ValueType,

    /// Printed when the variable is absent or does not convert;
    /// defaults to an empty string or zero depending on --as.
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,
}

/// Arguments for the `set` command.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Name of the environment variable to set (must be non-empty).
    pub name: String,

    /// Value to assign (must be non-empty).
    pub value: String,
}

/// Arguments for the `unset` command.
#[derive(Debug, Args)]
pub struct UnsetArgs {
    /// Name of the environment variable to remove.
    pub name: String,
}

/// Arguments for the `load` command.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Path to the env file.
    pub path: PathBuf,
}

/// The closed set of types `get` can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueType {
    /// Raw text, verbatim.
    #[default]
    String,
    /// 32-bit integer (0x/0 radix prefixes accepted, negatives rejected).
    Int,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if
/// help/version information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
