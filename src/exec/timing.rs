// src/exec/timing.rs

//! Wall-clock timing for closures and shell commands.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::errors::Result;
use crate::exec::command::{CaptureMode, ExecRequest, FailurePolicy, run};

/// Call `f` `repetitions` times and report total and mean wall-clock
/// time on stdout. Returns the mean time per call.
///
/// `label` prefixes the report, so several measurements can be told
/// apart in a script's output.
pub fn time_closure<F>(label: &str, repetitions: u32, mut f: F) -> Duration
where
    F: FnMut(),
{
    let reps = repetitions.max(1);
    let start = Instant::now();
    for _ in 0..reps {
        f();
    }
    let total = start.elapsed();
    let mean = total / reps;
    println!("{label} ({reps} calls): elapsed={total:?}, per call={mean:?}");
    mean
}

/// Run a shell command and report its wall-clock time on stdout.
///
/// A nonzero exit status is noted but is not an error here; spawn
/// failures still propagate. Only wall-clock time is reported, the
/// child's CPU time is not accounted.
pub fn time_command(label: &str, command: &str) -> Result<Duration> {
    let request = ExecRequest::new(command)
        .capture(CaptureMode::None)
        .on_failure(FailurePolicy::Silent);

    let start = Instant::now();
    let outcome = run(&request)?;
    let elapsed = start.elapsed();

    if !outcome.succeeded {
        println!(
            "note: command \"{command}\" exited with status {:?}",
            outcome.status
        );
    }
    println!("{label} command \"{command}\": elapsed={elapsed:?}");
    debug!(command, ?elapsed, "timed shell command");
    Ok(elapsed)
}
