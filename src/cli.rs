// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `errand`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "errand",
    version,
    about = "Small utilities for scripting: run commands, walk trees, find programs.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ERRAND_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Run a shell command with a failure policy and optional capture.
    Run {
        /// What to collect from the child (none, stdout, both).
        ///
        /// Collected lines are echoed after the run. Defaults to the
        /// `[exec]` section of the config, else "none".
        #[arg(long, value_name = "MODE")]
        capture: Option<String>,

        /// What a nonzero exit status does (exit, warn, raise, silent).
        ///
        /// Defaults to the `[exec]` section of the config, else "exit".
        #[arg(long, value_name = "POLICY")]
        on_failure: Option<String>,

        /// Echo the command before running it.
        #[arg(long)]
        verbose: bool,

        /// Print wall-clock timing after the run.
        #[arg(long)]
        time: bool,

        /// The command line to execute (joined with spaces).
        #[arg(required = true, trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Walk a directory tree in case-insensitive order.
    Walk {
        /// Root of the tree; a missing root is an empty traversal.
        root: PathBuf,

        /// Print one line per regular file instead of per directory.
        #[arg(long)]
        files: bool,
    },

    /// Locate programs on PATH.
    Which {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Copy or move files into a destination tree, keeping full paths.
    Mirror {
        /// Root of the destination tree.
        #[arg(long, value_name = "DIR")]
        dest: PathBuf,

        /// Move instead of copy.
        #[arg(long = "move")]
        do_move: bool,

        /// Print each transfer.
        #[arg(long)]
        verbose: bool,

        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Rewrap the paragraphs of a text file.
    Reflow {
        infile: PathBuf,
        outfile: PathBuf,

        /// Target line width.
        #[arg(long, value_name = "COLS", default_value_t = 70)]
        width: usize,

        /// Join each paragraph to a single line instead of wrapping.
        #[arg(long)]
        oneline: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
