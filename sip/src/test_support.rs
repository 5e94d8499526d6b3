//! Test-only helpers for building package fixtures.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::core::generator::PackageFiles;

/// In-memory package listing; nothing outside the listed files exists.
#[derive(Debug, Clone, Default)]
pub struct FakeFiles {
    files: BTreeSet<String>,
}

impl FakeFiles {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl PackageFiles for FakeFiles {
    fn exists(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    fn files_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.files
            .iter()
            .filter(|file| file.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}

/// Package directory in a temporary location, removed on drop.
pub struct TempPackage {
    dir: TempDir,
}

impl TempPackage {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
    }

    /// Write the package's Sipfile.
    pub fn write_sipfile(&self, contents: &str) {
        self.write("Sipfile", contents);
    }
}

impl Default for TempPackage {
    fn default() -> Self {
        Self::new()
    }
}
