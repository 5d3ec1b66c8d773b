//! Scratch directory trees for walker and mirror tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for an on-disk scratch tree rooted in a fresh `TempDir`.
///
/// Paths are `/`-separated and relative to the tree root; parent
/// directories of files are created implicitly.
#[derive(Debug, Default)]
pub struct TreeSpec {
    dirs: Vec<String>,
    files: Vec<(String, String)>,
}

impl TreeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an (empty) directory.
    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.push(path.to_string());
        self
    }

    /// Add a file with the given contents.
    pub fn file(mut self, path: &str, contents: &str) -> Self {
        self.files.push((path.to_string(), contents.to_string()));
        self
    }

    /// Materialise the tree and return the owning tempdir.
    pub fn build(self) -> TempDir {
        let root = tempfile::tempdir().expect("creating scratch tempdir");
        self.build_at(root.path());
        root
    }

    /// Materialise the tree under an existing directory.
    pub fn build_at(&self, root: &Path) {
        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir)).expect("creating scratch dir");
        }
        for (path, contents) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("creating scratch parent dir");
            }
            fs::write(&full, contents).expect("writing scratch file");
        }
    }
}

/// Record of one `walk_dirs` callback.
#[derive(Debug, Clone, PartialEq)]
pub struct DirVisit {
    pub dir: PathBuf,
    pub children: Vec<String>,
}

/// Run `errand::walk::walk_dirs` over `root` and collect every callback.
pub fn collect_dir_visits(root: &Path) -> Vec<DirVisit> {
    let mut visits = Vec::new();
    errand::walk::walk_dirs(root, |dir, names| {
        visits.push(DirVisit {
            dir: dir.to_path_buf(),
            children: names.to_vec(),
        });
    });
    visits
}

/// Run `errand::walk::visit_files` over `root` and collect every
/// visited path.
pub fn collect_file_visits(root: &Path) -> Vec<PathBuf> {
    let mut visited = Vec::new();
    errand::walk::visit_files(root, |path| visited.push(path.to_path_buf()));
    visited
}
