// src/exec/command.rs

//! Shell command execution with caller-selected failure handling.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;
use std::thread;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{ErrandError, Result};

/// How much of the child's output to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Child streams are inherited; nothing is collected.
    #[default]
    None,
    /// Collect stdout lines; stderr is inherited.
    Stdout,
    /// Collect stdout and stderr lines.
    #[serde(rename = "both")]
    StdoutAndStderr,
}

impl FromStr for CaptureMode {
    type Err = ErrandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(CaptureMode::None),
            "stdout" => Ok(CaptureMode::Stdout),
            "both" | "stdout+stderr" => Ok(CaptureMode::StdoutAndStderr),
            other => Err(ErrandError::InvalidCapture(other.to_string())),
        }
    }
}

/// What a nonzero exit status should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failure on stdout and terminate the calling process.
    #[default]
    Exit,
    /// Report the failure on stdout but keep going.
    Warn,
    /// Return a typed [`ErrandError::CommandFailed`] error.
    Raise,
    /// Say nothing; the outcome still records the failure.
    Silent,
}

impl FromStr for FailurePolicy {
    type Err = ErrandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exit" => Ok(FailurePolicy::Exit),
            "warn" | "warning" => Ok(FailurePolicy::Warn),
            "raise" | "exception" => Ok(FailurePolicy::Raise),
            "silent" => Ok(FailurePolicy::Silent),
            other => Err(ErrandError::InvalidPolicy(other.to_string())),
        }
    }
}

/// A single command invocation: what to run, what to collect, and how a
/// nonzero exit status is handled. Built per call, never shared.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    command: String,
    capture: CaptureMode,
    on_failure: FailurePolicy,
    verbose: bool,
}

impl ExecRequest {
    /// A request with the defaults of the scripting convention: no
    /// capture, `Exit` on failure, quiet.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            capture: CaptureMode::None,
            on_failure: FailurePolicy::Exit,
            verbose: false,
        }
    }

    pub fn capture(mut self, mode: CaptureMode) -> Self {
        self.capture = mode;
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Echo the command on stdout before running it.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Result of a single [`run`] call.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    /// True iff the exit status was zero.
    pub succeeded: bool,
    /// Exit status code, `None` when the child was killed by a signal.
    pub status: Option<i32>,
    /// Collected stdout lines; `Some` iff capture was requested.
    pub stdout_lines: Option<Vec<String>>,
    /// Collected stderr lines; `Some` iff stdout+stderr capture was requested.
    pub stderr_lines: Option<Vec<String>>,
}

/// Execute `request.command` through the platform shell and wait for it.
///
/// With capture enabled, the child's streams are drained to EOF before
/// the process handle is reaped, so nothing is truncated on a normal
/// exit. An exit status of zero counts as success; anything else is
/// dispatched per the request's [`FailurePolicy`]. Note that some tools
/// exit nonzero on semantically successful runs (`grep` with no matches,
/// for instance); no allowance is made for them here, so callers wrapping
/// such tools should pick a forgiving policy and inspect the outcome.
///
/// Spawn and pipe errors are real errors and propagate under every
/// policy; policies only govern the exit status.
pub fn run(request: &ExecRequest) -> Result<ExecOutcome> {
    if request.verbose {
        println!("running command: {}", request.command);
    }
    debug!(command = %request.command, capture = ?request.capture, "spawning shell command");

    let mut cmd = shell_command(&request.command);

    let (status, stdout_lines, stderr_lines) = match request.capture {
        CaptureMode::None => {
            let status = cmd
                .status()
                .with_context(|| format!("running command \"{}\"", request.command))?;
            (status, None, None)
        }
        CaptureMode::Stdout => {
            cmd.stdout(Stdio::piped());
            let mut child = cmd
                .spawn()
                .with_context(|| format!("spawning shell for \"{}\"", request.command))?;
            let out = drain_lines(child.stdout.take());
            let status = wait_for(&request.command, child)?;
            (status, Some(out), None)
        }
        CaptureMode::StdoutAndStderr => {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            let mut child = cmd
                .spawn()
                .with_context(|| format!("spawning shell for \"{}\"", request.command))?;
            // Drain stderr on a helper thread so a chatty child cannot
            // fill one pipe while we block reading the other.
            let stderr = child.stderr.take();
            let stderr_reader = thread::spawn(move || drain_lines(stderr));
            let out = drain_lines(child.stdout.take());
            let err = stderr_reader.join().unwrap_or_default();
            let status = wait_for(&request.command, child)?;
            (status, Some(out), Some(err))
        }
    };

    let succeeded = status.success();
    if !succeeded {
        handle_failure(request, status.code())?;
    }
    debug!(
        command = %request.command,
        status = ?status.code(),
        succeeded,
        "command finished"
    );

    Ok(ExecOutcome {
        succeeded,
        status: status.code(),
        stdout_lines,
        stderr_lines,
    })
}

/// Build a platform shell invocation for an opaque command string.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

/// Read a captured stream to EOF, one line per entry.
fn drain_lines<R: Read>(stream: Option<R>) -> Vec<String> {
    let Some(stream) = stream else {
        return Vec::new();
    };
    BufReader::new(stream)
        .lines()
        .map_while(|line| line.ok())
        .collect()
}

fn wait_for(command: &str, mut child: std::process::Child) -> Result<ExitStatus> {
    let status = child
        .wait()
        .with_context(|| format!("waiting for \"{command}\""))?;
    Ok(status)
}

fn handle_failure(request: &ExecRequest, status: Option<i32>) -> Result<()> {
    match request.on_failure {
        FailurePolicy::Exit => {
            println!("command failed: {}\nexecution aborted", request.command);
            std::process::exit(1);
        }
        FailurePolicy::Warn => {
            println!("warning: command failed: {}", request.command);
            Ok(())
        }
        FailurePolicy::Raise => Err(ErrandError::CommandFailed {
            command: request.command.clone(),
            status,
        }),
        FailurePolicy::Silent => Ok(()),
    }
}
