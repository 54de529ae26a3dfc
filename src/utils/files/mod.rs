//! Recursive file discovery for the linters' inputs.
//!
//! Walks are sorted by file name so repeated runs visit files in the same
//! order. Symlinks are not followed.

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl From<DiscoveryError> for AppError {
    fn from(e: DiscoveryError) -> Self {
        let DiscoveryError::Walk { ref root, .. } = e;
        let root = root.display().to_string();
        let mut error = AppError::with_source(ErrorCategory::DiscoveryError, e.to_string(), Box::new(e));
        error.add_context("root", &root);
        error
    }
}

pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;

/// Every file under `root` whose extension is `ext`. A leading dot on `ext`
/// is accepted.
pub fn find_by_extension(root: &Path, ext: &str) -> DiscoveryResult<Vec<PathBuf>> {
    let ext = ext.trim_start_matches('.');
    collect_files(root, |entry| {
        entry.path().extension() == Some(OsStr::new(ext))
    })
}

/// Every file under `root` whose final path segment is `name`.
pub fn find_by_name(root: &Path, name: &str) -> DiscoveryResult<Vec<PathBuf>> {
    collect_files(root, |entry| entry.file_name() == OsStr::new(name))
}

/// All files beneath the first directory under `root` named `dir_name`.
/// Returns an empty list when there is no such directory.
pub fn find_dir_contents(root: &Path, dir_name: &str) -> DiscoveryResult<Vec<PathBuf>> {
    let mut target = None;
    for entry in walker(root) {
        let entry = walk_entry(root, entry)?;
        if entry.file_type().is_dir() && entry.depth() > 0 && entry.file_name() == OsStr::new(dir_name)
        {
            target = Some(entry.into_path());
            break;
        }
    }

    match target {
        Some(dir) => collect_files(&dir, |_| true),
        None => Ok(Vec::new()),
    }
}

fn collect_files<F>(root: &Path, matches: F) -> DiscoveryResult<Vec<PathBuf>>
where
    F: Fn(&DirEntry) -> bool,
{
    let mut files = Vec::new();
    for entry in walker(root) {
        let entry = walk_entry(root, entry)?;
        if entry.file_type().is_dir() {
            continue;
        }
        if matches(&entry) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn walker(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

fn walk_entry(root: &Path, entry: walkdir::Result<DirEntry>) -> DiscoveryResult<DirEntry> {
    entry.map_err(|source| DiscoveryError::Walk {
        root: root.to_path_buf(),
        source,
    })
}
