// src/text/mod.rs

//! Small string and text-file helpers.
//!
//! - [`paragraphs`] groups lines and reflows paragraph-oriented text.
//! - [`regex_debug`] visualizes regex matches for debugging.

pub mod paragraphs;
pub mod regex_debug;

pub use paragraphs::{oneline_file, paragraphs, reflow_file, wrap_paragraph};
pub use regex_debug::explain_match;

use std::collections::HashSet;
use std::hash::Hash;

/// The part of `s` before the first `marker`, or `None` when absent.
pub fn before(s: &str, marker: char) -> Option<&str> {
    s.find(marker).map(|i| &s[..i])
}

/// The part of `s` after the first `marker`, or `None` when absent.
pub fn after(s: &str, marker: char) -> Option<&str> {
    s.find(marker).map(|i| &s[i + marker.len_utf8()..])
}

/// Remove duplicate items, keeping the first occurrence of each in its
/// original position.
pub fn dedup_preserving_order<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}
