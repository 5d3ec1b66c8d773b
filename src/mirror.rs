// src/mirror.rs

//! Copying or moving files into a destination tree that preserves each
//! file's full original path.
//!
//! Useful for backups that restore mechanically: the complete source
//! path is kept below the destination root, so nothing collides and
//! every file's origin stays evident.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Whether the originals survive the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    #[default]
    Copy,
    Move,
}

/// Options for [`mirror_files`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorOptions {
    pub mode: TransferMode,
    /// Print each transfer to stdout.
    pub verbose: bool,
}

/// Mirror `files` below `dest_root`, preserving their absolute paths.
///
/// Each file's canonical path, stripped of its root or drive prefix, is
/// re-rooted under `dest_root`; intermediate directories are created as
/// needed. Returns the destination path of each file, in input order.
pub fn mirror_files(
    files: &[PathBuf],
    dest_root: &Path,
    options: MirrorOptions,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(files.len());
    for file in files {
        let absolute =
            fs::canonicalize(file).with_context(|| format!("resolving {:?}", file))?;
        let target = dest_root.join(rootless(&absolute));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {:?}", parent))?;
        }
        fs::copy(&absolute, &target)
            .with_context(|| format!("copying {:?} to {:?}", absolute, target))?;
        let action = match options.mode {
            TransferMode::Copy => "copied",
            TransferMode::Move => {
                fs::remove_file(&absolute)
                    .with_context(|| format!("removing {:?} after copy", absolute))?;
                "moved"
            }
        };
        if options.verbose {
            println!("{action} {} to {}", file.display(), target.display());
        }
        debug!(from = ?absolute, to = ?target, action, "mirrored file");
        created.push(target);
    }
    Ok(created)
}

/// Strip the root (or drive) prefix so the path can be re-rooted.
fn rootless(absolute: &Path) -> PathBuf {
    absolute
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}
