//! Builds argument vectors from structured command descriptions and executes them.
//!
//! A command is described by its name, ordered positional arguments and an
//! unordered set of flags. Flag names never carry their own prefix: names of a
//! single character are emitted as `-f`, longer names as `--flag`. Flag order in
//! the resulting vector is unspecified.

use crate::common::process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
use crate::error::{NiktoGateError, Result};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const SIMPLE_FLAG_PREFIX: &str = "-";
pub const COMPLEX_FLAG_PREFIX: &str = "--";

/// Value carried by a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Flag stands alone, no value token is emitted
    Switch,
    /// Flag followed by one value token
    Value(String),
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        if value {
            FlagValue::Switch
        } else {
            FlagValue::Value(value.to_string())
        }
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Value(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Value(value)
    }
}

impl From<&String> for FlagValue {
    fn from(value: &String) -> Self {
        FlagValue::Value(value.clone())
    }
}

/// Paths convert only when they are valid UTF-8, so the token sent is the path given.
impl TryFrom<&Path> for FlagValue {
    type Error = NiktoGateError;

    fn try_from(value: &Path) -> Result<Self> {
        value
            .to_str()
            .map(FlagValue::from)
            .ok_or_else(|| NiktoGateError::NonUtf8Path(value.to_path_buf()))
    }
}

impl TryFrom<PathBuf> for FlagValue {
    type Error = NiktoGateError;

    fn try_from(value: PathBuf) -> Result<Self> {
        FlagValue::try_from(value.as_path())
    }
}

macro_rules! flag_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FlagValue {
                fn from(value: $ty) -> Self {
                    FlagValue::Value(value.to_string())
                }
            }
        )*
    };
}

flag_value_from_display!(i32, i64, u16, u32, u64, usize, f32, f64);

/// Flag name to value. Iteration order carries no meaning.
pub type Flags = HashMap<String, FlagValue>;

/// Prefix for a flag name, chosen by the name's length
pub fn flag_prefix(name: &str) -> &'static str {
    if name.chars().count() > 1 {
        COMPLEX_FLAG_PREFIX
    } else {
        SIMPLE_FLAG_PREFIX
    }
}

/// True when `token` would be read as a flag by the receiving process
pub(crate) fn starts_with_prefix(token: &str) -> bool {
    token.starts_with(COMPLEX_FLAG_PREFIX) || token.starts_with(SIMPLE_FLAG_PREFIX)
}

/// Assemble `command`, then `positional` in order, then every flag.
///
/// All flags are validated before anything is emitted, so a rejected call never
/// yields a partial vector.
pub fn build_argument_vector(command: &str, positional: &[&str], flags: &Flags) -> Result<Vec<String>> {
    for (name, value) in flags {
        if name.is_empty() || starts_with_prefix(name) {
            return Err(NiktoGateError::InvalidFlagName(name.clone()));
        }
        if let FlagValue::Value(value) = value
            && starts_with_prefix(value)
        {
            return Err(NiktoGateError::MalformedValue {
                flag: name.clone(),
                value: value.clone(),
            });
        }
    }

    let mut argv = Vec::with_capacity(1 + positional.len() + flags.len() * 2);
    argv.push(command.to_string());
    argv.extend(positional.iter().map(|arg| arg.to_string()));

    for (name, value) in flags {
        argv.push(format!("{}{}", flag_prefix(name), name));
        if let FlagValue::Value(value) = value {
            argv.push(value.clone());
        }
    }

    Ok(argv)
}

/// Runs a structured command description as an external process
pub trait Execute {
    fn execute(&self, command: &str, positional: &[&str], flags: &Flags) -> Result<ProcessOutput>;
}

impl<E: Execute + ?Sized> Execute for &E {
    fn execute(&self, command: &str, positional: &[&str], flags: &Flags) -> Result<ProcessOutput> {
        (**self).execute(command, positional, flags)
    }
}

/// Builds the argument vector and hands it to a [`ProcessRunner`].
///
/// Holds no per-call state; one executor can be shared by any number of callers.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor<R = SystemProcessRunner> {
    runner: R,
}

impl CommandExecutor<SystemProcessRunner> {
    /// Executor backed by real processes
    pub fn system() -> Self {
        Self::new(SystemProcessRunner::new())
    }
}

impl<R: ProcessRunner> CommandExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: ProcessRunner> Execute for CommandExecutor<R> {
    fn execute(&self, command: &str, positional: &[&str], flags: &Flags) -> Result<ProcessOutput> {
        let argv = build_argument_vector(command, positional, flags)?;
        debug!("Executing command: {}", argv.join(" "));
        self.runner.run(&argv)
    }
}
