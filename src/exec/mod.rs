// src/exec/mod.rs

//! Process execution layer.
//!
//! Everything here is synchronous: callers block until the child exits
//! and any requested output has been drained.
//!
//! - [`command`] runs an opaque shell command with a caller-selected
//!   failure policy and capture mode.
//! - [`programs`] locates external programs on `PATH`.
//! - [`timing`] wraps closures and commands with wall-clock timing.

pub mod command;
pub mod programs;
pub mod timing;

pub use command::{CaptureMode, ExecOutcome, ExecRequest, FailurePolicy, run};
pub use programs::{find_program, find_program_in, find_programs, find_programs_described};
pub use timing::{time_closure, time_command};
