// src/lib.rs

pub mod argv;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod mirror;
pub mod sys;
pub mod text;
pub mod value;
pub mod walk;

use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, CliCommand};
use crate::config::{ExecDefaults, load_layered};
use crate::exec::{CaptureMode, ExecRequest, FailurePolicy, find_programs};
use crate::mirror::{MirrorOptions, TransferMode, mirror_files};
use crate::text::{oneline_file, reflow_file};
use crate::walk::{visit_files, walk_dirs};

/// Config-file name stem: layers are read from `~/.errand.toml` and
/// `./.errand.toml`.
pub const CONFIG_NAME: &str = "errand";

/// High-level entry point used by `main.rs`: dispatch a parsed CLI
/// invocation to the library.
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        CliCommand::Run {
            capture,
            on_failure,
            verbose,
            time,
            command,
        } => run_command_line(capture, on_failure, verbose, time, &command),
        CliCommand::Walk { root, files } => {
            print_tree(&root, files);
            Ok(())
        }
        CliCommand::Which { names } => report_programs(&names),
        CliCommand::Mirror {
            dest,
            do_move,
            verbose,
            files,
        } => {
            let options = MirrorOptions {
                mode: if do_move {
                    TransferMode::Move
                } else {
                    TransferMode::Copy
                },
                verbose,
            };
            mirror_files(&files, &dest, options)?;
            Ok(())
        }
        CliCommand::Reflow {
            infile,
            outfile,
            width,
            oneline,
        } => {
            if oneline {
                oneline_file(&infile, &outfile)
            } else {
                reflow_file(&infile, &outfile, width)
            }
        }
    }
}

/// The `run` subcommand: CLI flags override `[exec]` config defaults,
/// which override the library defaults.
fn run_command_line(
    capture: Option<String>,
    on_failure: Option<String>,
    verbose: bool,
    time: bool,
    command: &[String],
) -> Result<()> {
    let defaults = ExecDefaults::from_table(&load_layered(CONFIG_NAME, &[])?)?;

    let capture = match capture {
        Some(text) => CaptureMode::from_str(&text)?,
        None => defaults.capture.unwrap_or_default(),
    };
    let on_failure = match on_failure {
        Some(text) => FailurePolicy::from_str(&text)?,
        None => defaults.on_failure.unwrap_or_default(),
    };
    let request = ExecRequest::new(command.join(" "))
        .capture(capture)
        .on_failure(on_failure)
        .verbose(verbose || defaults.verbose.unwrap_or(false));

    let start = Instant::now();
    let outcome = exec::run(&request)?;

    if let Some(lines) = &outcome.stdout_lines {
        for line in lines {
            println!("{line}");
        }
    }
    if let Some(lines) = &outcome.stderr_lines {
        for line in lines {
            eprintln!("{line}");
        }
    }
    if time {
        println!("elapsed: {:?}", start.elapsed());
    }
    debug!(succeeded = outcome.succeeded, "run subcommand finished");
    Ok(())
}

fn print_tree(root: &Path, files_only: bool) {
    if files_only {
        visit_files(root, |path| println!("{}", path.display()));
    } else {
        walk_dirs(root, |dir, names| {
            println!("{}", dir.display());
            for name in names {
                println!("  {name}");
            }
        });
    }
}

fn report_programs(names: &[String]) -> Result<()> {
    let found = find_programs(names);
    let mut missing = 0usize;
    for (name, path) in &found {
        match path {
            Some(path) => println!("{name}: {}", path.display()),
            None => {
                println!("{name}: not found");
                missing += 1;
            }
        }
    }
    if missing > 0 {
        anyhow::bail!("{missing} program(s) not found");
    }
    Ok(())
}
