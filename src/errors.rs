// src/errors.rs

//! Crate-wide error type and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrandError {
    #[error("command failed: {command}")]
    CommandFailed {
        command: String,
        /// Exit status code, `None` when the child was killed by a signal.
        status: Option<i32>,
    },

    #[error("invalid failure policy \"{0}\" (expected exit, warn, raise or silent)")]
    InvalidPolicy(String),

    #[error("invalid capture mode \"{0}\" (expected none, stdout or both)")]
    InvalidCapture(String),

    #[error("no value after option {0}")]
    MissingOptionValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ErrandError>;
