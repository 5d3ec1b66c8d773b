// src/config/mod.rs

//! Layered configuration loading.
//!
//! A tool named `name` reads `~/.{name}.toml`, then `./.{name}.toml`,
//! then `{dir}/{name}.toml` for any explicitly supplied locations, and
//! merges whatever exists. [`model`] holds the typed views over the
//! merged table.

pub mod loader;
pub mod model;

pub use loader::{load_layered, load_layered_from, search_paths};
pub use model::ExecDefaults;
