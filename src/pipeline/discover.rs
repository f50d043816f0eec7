//! Discovery: walk the source tree and list PDFs in processing order.
//!
//! Order is top-down: a directory's files come first, in the order the
//! filesystem returns them, then each subdirectory is descended in turn.
//! Nothing is sorted.
//!
//! The output root is excluded by a path-prefix test on canonical paths,
//! checked once per directory before it is listed. When the output root
//! lives inside the source tree, images from earlier runs (and any stray
//! PDFs dropped next to them) are never picked up again.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `true` iff `filename` ends with `.pdf`, compared case-insensitively.
pub fn is_pdf(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Collect every PDF under `base_dir`, skipping `exclude` and everything
/// below it.
///
/// Unreadable directories are logged and skipped. Symlinked directories are
/// not followed.
pub fn discover_pdfs(base_dir: &Path, exclude: &Path) -> Vec<PathBuf> {
    let exclude = canonical_or_absolute(exclude);
    let mut found = Vec::new();
    walk(base_dir, &exclude, &mut found);
    debug!("Discovered {} PDF(s) under {}", found.len(), base_dir.display());
    found
}

/// `true` if `dir` is `root` or lies underneath it (component-wise).
/// `root` must already be canonical.
pub fn is_within(dir: &Path, root: &Path) -> bool {
    canonical_or_absolute(dir).starts_with(root)
}

fn walk(dir: &Path, exclude: &Path, found: &mut Vec<PathBuf>) {
    if is_within(dir, exclude) {
        debug!("Skipping output directory {}", dir.display());
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot read entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            debug!("Not following symlinked directory {}", path.display());
        } else if is_pdf(&entry.file_name().to_string_lossy()) {
            found.push(path);
        }
    }

    for sub in subdirs {
        walk(&sub, exclude, found);
    }
}

fn canonical_or_absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
