// src/walk/mod.rs

//! Deterministic directory-tree traversal.
//!
//! Both walkers list each directory's immediate children, sort the names
//! case-insensitively (the sort is stable, so names that differ only in
//! case keep their listing order) and then go depth-first in that order.
//!
//! Failure handling is deliberately forgiving: a directory that cannot
//! be listed (permission denied, vanished, or a root that never existed)
//! quietly ends the traversal of that subtree. Symbolic links are never
//! followed, which is also the only cycle protection on offer.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Pre-order walk: `on_dir(dir, sorted_child_names)` fires exactly once
/// per directory, before any of its subdirectories are entered.
///
/// State that the callback needs travels by closure capture.
pub fn walk_dirs<F>(root: &Path, mut on_dir: F)
where
    F: FnMut(&Path, &[String]),
{
    walk_dirs_inner(root, &mut on_dir);
}

fn walk_dirs_inner<F>(dir: &Path, on_dir: &mut F)
where
    F: FnMut(&Path, &[String]),
{
    let Some(names) = list_sorted(dir) else {
        return;
    };
    on_dir(dir, &names);
    for name in &names {
        let child = dir.join(name);
        let Some(kind) = entry_kind(&child) else {
            continue;
        };
        if kind.is_dir() {
            walk_dirs_inner(&child, on_dir);
        }
    }
}

/// Depth-first file visitor: symlinks are skipped, directories are
/// entered, regular files invoke `on_file`. Same ordering rules as
/// [`walk_dirs`].
pub fn visit_files<F>(root: &Path, mut on_file: F)
where
    F: FnMut(&Path),
{
    visit_files_inner(root, &mut on_file);
}

fn visit_files_inner<F>(dir: &Path, on_file: &mut F)
where
    F: FnMut(&Path),
{
    let Some(names) = list_sorted(dir) else {
        return;
    };
    for name in &names {
        let path = dir.join(name);
        let Some(kind) = entry_kind(&path) else {
            continue;
        };
        if kind.is_symlink() {
            // links are dropped, not followed
        } else if kind.is_dir() {
            visit_files_inner(&path, on_file);
        } else if kind.is_file() {
            on_file(&path);
        } else {
            debug!(path = ?path, "skipping special file");
        }
    }
}

/// Sort `names` case-insensitively; equal-modulo-case names keep their
/// relative order.
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}

/// Immediate child names of `dir`, sorted via [`sort_names`].
///
/// `None` when the directory cannot be listed; callers treat that as an
/// empty subtree.
fn list_sorted(dir: &Path) -> Option<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = ?dir, error = %err, "directory not listable, subtree skipped");
            return None;
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    sort_names(&mut names);
    Some(names)
}

/// File type without following symlinks; `None` when the entry vanished
/// between listing and inspection.
fn entry_kind(path: &Path) -> Option<fs::FileType> {
    fs::symlink_metadata(path).ok().map(|meta| meta.file_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut v = names(&["gamma.txt", "Alpha.txt", "beta.txt"]);
        sort_names(&mut v);
        assert_eq!(v, names(&["Alpha.txt", "beta.txt", "gamma.txt"]));
    }

    #[test]
    fn sort_keeps_listing_order_for_case_ties() {
        let mut v = names(&["b.txt", "B.txt"]);
        sort_names(&mut v);
        assert_eq!(v, names(&["b.txt", "B.txt"]));

        let mut v = names(&["B.txt", "b.txt"]);
        sort_names(&mut v);
        assert_eq!(v, names(&["B.txt", "b.txt"]));
    }

    #[test]
    fn missing_root_invokes_no_callback() {
        let mut dir_calls = 0;
        walk_dirs(Path::new("/errand/never/existed"), |_, _| dir_calls += 1);
        assert_eq!(dir_calls, 0);

        let mut file_calls = 0;
        visit_files(Path::new("/errand/never/existed"), |_| file_calls += 1);
        assert_eq!(file_calls, 0);
    }
}
