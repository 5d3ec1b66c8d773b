// src/exec/programs.rs

//! Locating external programs on `PATH`.
//!
//! Scripts often branch on whether a tool is installed before shelling
//! out to it. These helpers answer that question without spawning
//! anything.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Find a single program on `PATH`, returning its full path.
pub fn find_program(name: &str) -> Option<PathBuf> {
    find_program_in(&path_dirs(), name)
}

/// Find several programs at once; missing ones map to `None`.
pub fn find_programs<S: AsRef<str>>(names: &[S]) -> BTreeMap<String, Option<PathBuf>> {
    let dirs = path_dirs();
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), find_program_in(&dirs, name))
        })
        .collect()
}

/// Like [`find_programs`], but each entry carries a human-readable
/// description that is printed for programs that are not found.
///
/// ```no_run
/// use errand::exec::find_programs_described;
///
/// let tools = find_programs_described(&[
///     ("gs", "Ghostscript, for file format conversions"),
///     ("convert", "ImageMagick's converter"),
/// ]);
/// if tools.values().any(Option::is_none) {
///     eprintln!("install the tools listed above first");
/// }
/// ```
pub fn find_programs_described(
    entries: &[(&str, &str)],
) -> BTreeMap<String, Option<PathBuf>> {
    let dirs = path_dirs();
    let mut found = BTreeMap::new();
    for (name, description) in entries {
        let hit = find_program_in(&dirs, name);
        if hit.is_none() {
            println!("program \"{name}\" ({description}) not found");
        }
        found.insert((*name).to_string(), hit);
    }
    found
}

/// Search an explicit directory list for `name`, first hit wins.
///
/// Directories that do not exist are skipped. On Windows the probe
/// tries `name.exe` and `name.bat`; elsewhere the candidate must be a
/// regular file with an execute bit set.
pub fn find_program_in(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }
        if let Some(hit) = probe(dir, name) {
            debug!(program = name, path = ?hit, "program found");
            return Some(hit);
        }
    }
    None
}

/// The directories named by `PATH`, in order.
fn path_dirs() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(windows)]
fn probe(dir: &Path, name: &str) -> Option<PathBuf> {
    for ext in ["exe", "bat"] {
        let candidate = dir.join(format!("{name}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(not(windows))]
fn probe(dir: &Path, name: &str) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let candidate = dir.join(name);
    let meta = std::fs::metadata(&candidate).ok()?;
    if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
        Some(candidate)
    } else {
        None
    }
}
