//! Point-in-time listing of the files of a package.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::generator::PackageFiles;

/// Canonical paths of a package rooted at `root`.
#[derive(Debug, Clone)]
pub struct PackagePaths {
    pub root: PathBuf,
    pub sipfile_path: PathBuf,
}

/// Prefix of build artifacts that never count as package files.
pub const CACHE_PREFIX: &str = "utils/cache/";

impl PackagePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            sipfile_path: root.join("Sipfile"),
            root,
        }
    }
}

/// Files under a package root, as `/`-separated paths relative to it.
///
/// Existence checks also consult the filesystem relative to the root, so
/// directories and absolute paths resolve too.
#[derive(Debug, Clone)]
pub struct PackageContents {
    root: PathBuf,
    files: BTreeSet<String>,
}

impl PackageContents {
    /// Walk `root` recursively and record every file.
    pub fn load_from_directory(root: &Path) -> Result<Self> {
        let mut files = BTreeSet::new();
        for entry in WalkDir::new(root) {
            let entry = entry.with_context(|| format!("walk {}", root.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("relativize {}", entry.path().display()))?;
            let relative: Vec<String> = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.insert(relative.join("/"));
        }
        debug!(root = %root.display(), files = files.len(), "loaded package contents");
        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Drop every file whose path starts with `prefix`.
    pub fn remove_with_prefix(&mut self, prefix: &str) {
        self.files.retain(|file| !file.starts_with(prefix));
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

/// Snapshot of `root` without build artifacts, as used for generator lookup.
pub fn package_snapshot(root: &Path) -> Result<PackageContents> {
    let mut contents = PackageContents::load_from_directory(root)?;
    contents.remove_with_prefix(CACHE_PREFIX);
    Ok(contents)
}

impl PackageFiles for PackageContents {
    fn exists(&self, path: &str) -> bool {
        self.files.contains(path) || self.root.join(path).exists()
    }

    fn files_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.files
            .iter()
            .filter(|file| file.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}
