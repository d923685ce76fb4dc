//! Process and filesystem plumbing shared by the scanner wrappers.

pub mod command_utils;
pub mod path;
pub mod process;

pub use command_utils::{CommandExecutor, Execute, FlagValue, Flags, build_argument_vector};
pub use path::{FsPathChecker, PathChecker};
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
