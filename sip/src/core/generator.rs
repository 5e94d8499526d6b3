//! Resolution of the generator named by a `gen` entry.
//!
//! A generator token is looked up in this order:
//!
//! 1. `sh:<command>` is always a shell command.
//! 2. A token naming an existing path is that file.
//! 3. A token that is a subsequence of exactly one source file under `utils/`
//!    is that file (`gen` matches `utils/gen.cpp`, `g1` matches
//!    `utils/gen1.py`).
//! 4. Anything else falls back to a shell command, with a warning.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::core::warnings::{Warning, WarningSink};
use crate::error::SipfileError;

/// Prefix marking a generator token as a literal shell command.
pub const SHELL_PREFIX: &str = "sh:";

/// Directory whose source files are generator candidates.
pub const GENERATORS_DIR: &str = "utils/";

/// What produces a generated test's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GeneratorRef {
    /// Path relative to the package root (or absolute).
    FilePath(String),
    /// Command passed to the shell, without the `sh:` prefix.
    ShellCommand(String),
}

impl fmt::Display for GeneratorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorRef::FilePath(path) => f.write_str(path),
            GeneratorRef::ShellCommand(command) => write!(f, "{SHELL_PREFIX}{command}"),
        }
    }
}

/// Read-only view of the files of a package.
pub trait PackageFiles {
    /// True if `path` names an existing file or directory of the package.
    fn exists(&self, path: &str) -> bool;

    /// Files whose package-relative path starts with `prefix`, in a stable
    /// order.
    fn files_with_prefix(&self, prefix: &str) -> Vec<&str>;
}

/// Decides which files may serve as generators.
pub trait SourceClassifier {
    fn is_source(&self, path: &str) -> bool;
}

/// Classifies source files by extension.
#[derive(Debug, Clone)]
pub struct SourceExtensions {
    extensions: Vec<String>,
}

impl SourceExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for SourceExtensions {
    fn default() -> Self {
        Self::new(["c", "cc", "cpp", "cxx", "pas", "py", "rs"])
    }
}

impl SourceClassifier for SourceExtensions {
    fn is_source(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}

/// Resolve `token` against the package `files`.
///
/// Fails if more than one candidate source file matches. Emits exactly one
/// warning when nothing matches and the token becomes a shell command.
pub fn resolve_generator<F, C, W>(
    token: &str,
    files: &F,
    classifier: &C,
    warnings: &mut W,
) -> Result<GeneratorRef, SipfileError>
where
    F: PackageFiles + ?Sized,
    C: SourceClassifier + ?Sized,
    W: WarningSink + ?Sized,
{
    if let Some(command) = token.strip_prefix(SHELL_PREFIX) {
        return Ok(GeneratorRef::ShellCommand(command.to_string()));
    }
    if files.exists(token) {
        return Ok(GeneratorRef::FilePath(token.to_string()));
    }

    let mut found: Option<&str> = None;
    for file in files.files_with_prefix(GENERATORS_DIR) {
        if !is_subsequence(token, file) || !classifier.is_source(file) {
            continue;
        }
        if let Some(first) = found {
            return Err(SipfileError::AmbiguousGenerator {
                token: token.to_string(),
                first: first.to_string(),
                second: file.to_string(),
            });
        }
        found = Some(file);
    }

    match found {
        Some(file) => Ok(GeneratorRef::FilePath(file.to_string())),
        None => {
            warnings.warn(Warning::GeneratorAsShellCommand {
                token: token.to_string(),
            });
            Ok(GeneratorRef::ShellCommand(token.to_string()))
        }
    }
}

/// True if the characters of `needle` appear in `haystack` in order.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|wanted| rest.any(|ch| ch == wanted))
}
