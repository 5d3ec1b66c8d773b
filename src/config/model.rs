// src/config/model.rs

use anyhow::Context;
use serde::Deserialize;
use toml::Table;

use crate::exec::{CaptureMode, FailurePolicy};

/// Typed view of the `[exec]` table in an `errand` config file.
///
/// ```toml
/// [exec]
/// capture = "stdout"
/// on_failure = "warn"
/// verbose = true
/// ```
///
/// All fields are optional; unset ones fall back to the library
/// defaults at the point of use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecDefaults {
    #[serde(default)]
    pub capture: Option<CaptureMode>,

    #[serde(default)]
    pub on_failure: Option<FailurePolicy>,

    #[serde(default)]
    pub verbose: Option<bool>,
}

impl ExecDefaults {
    /// Extract the `[exec]` section from a merged config table.
    ///
    /// A missing section yields the all-`None` default; a malformed one
    /// is an error.
    pub fn from_table(table: &Table) -> anyhow::Result<Self> {
        match table.get("exec") {
            Some(value) => value
                .clone()
                .try_into()
                .context("reading [exec] config section"),
            None => Ok(Self::default()),
        }
    }
}
