use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::CleanupFailure;

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Remove everything inside `dir` while keeping `dir` itself.
///
/// Entries that cannot be removed are logged and returned; the remaining
/// entries are still attempted. Failing to list `dir` is reported as a
/// single failure for the directory.
pub fn clear_dir(dir: &Path) -> Vec<CleanupFailure> {
    let mut failures = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            error!("Failed to list {}. Reason: {}", dir.display(), error);
            failures.push(CleanupFailure {
                path: dir.to_path_buf(),
                error,
            });
            return failures;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(error) => {
                error!("Failed to read entry in {}. Reason: {}", dir.display(), error);
                failures.push(CleanupFailure {
                    path: dir.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        // symlink_metadata so a link to a directory is unlinked, not followed
        let result = fs::symlink_metadata(&path).and_then(|meta| {
            if meta.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            }
        });

        if let Err(error) = result {
            error!("Failed to delete {}. Reason: {}", path.display(), error);
            failures.push(CleanupFailure { path, error });
        }
    }

    failures
}

/// Paths of the entries of `dir`, in directory listing order
pub fn list_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    Ok(paths)
}
