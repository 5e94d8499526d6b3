//! The Sipfile of a package: time limit, static tests and generated tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::config::SipfileConfig;
use crate::core::generator::{PackageFiles, SourceClassifier, SourceExtensions};
use crate::core::sections::{GenTest, load_gen_tests, load_static_tests};
use crate::core::time_limit::load_default_time_limit;
use crate::core::warnings::{TracingWarnings, WarningSink};
use crate::error::SipfileError;
use crate::io::package::{PackageContents, PackagePaths, package_snapshot};
use crate::io::sipfile_store::read_sipfile;

/// Extension of test input files.
const INPUT_EXTENSION: &str = ".in";

/// Loaded Sipfile state.
///
/// Every `load_*` method replaces its section only on success; a failed load
/// leaves the previous contents in place. [`Sipfile::reload_from_str`] commits
/// the configuration and all sections together or not at all.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sipfile {
    #[serde(skip)]
    config: SipfileConfig,
    pub default_time_limit: Option<Duration>,
    pub static_tests: BTreeSet<String>,
    pub gen_tests: BTreeMap<String, GenTest>,
}

impl Sipfile {
    /// Parse `contents`; sections stay empty until loaded.
    pub fn parse(contents: &str) -> Result<Self, SipfileError> {
        Ok(Self {
            config: SipfileConfig::parse(contents)?,
            ..Self::default()
        })
    }

    /// Read the package's Sipfile and load every section, logging warnings.
    ///
    /// A package without a Sipfile has no tests and no default time limit.
    pub fn load(root: &Path) -> Result<Self> {
        let files = package_snapshot(root)?;
        Self::load_with_files(root, &files)
    }

    /// Like [`Sipfile::load`], resolving generators against an existing
    /// snapshot of the package.
    pub fn load_with_files(root: &Path, files: &PackageContents) -> Result<Self> {
        let paths = PackagePaths::new(root);
        let contents = read_sipfile(&paths.sipfile_path)?.unwrap_or_default();
        let mut sipfile = Sipfile::default();
        sipfile
            .reload_from_str(&contents, files, &mut TracingWarnings)
            .with_context(|| format!("load {}", paths.sipfile_path.display()))?;
        Ok(sipfile)
    }

    /// Replace the configuration with `contents` and reload all sections.
    ///
    /// On error `self` is left exactly as it was.
    pub fn reload_from_str<F, W>(
        &mut self,
        contents: &str,
        files: &F,
        warnings: &mut W,
    ) -> Result<(), SipfileError>
    where
        F: PackageFiles + ?Sized,
        W: WarningSink + ?Sized,
    {
        let mut fresh = Sipfile::parse(contents)?;
        fresh.load_default_time_limit()?;
        fresh.load_static_tests(warnings)?;
        fresh.load_gen_tests(files, &SourceExtensions::default(), warnings)?;
        *self = fresh;
        Ok(())
    }

    pub fn load_default_time_limit(&mut self) -> Result<(), SipfileError> {
        self.default_time_limit = load_default_time_limit(&self.config)?;
        Ok(())
    }

    pub fn load_static_tests<W>(&mut self, warnings: &mut W) -> Result<(), SipfileError>
    where
        W: WarningSink + ?Sized,
    {
        self.static_tests = load_static_tests(&self.config, warnings)?;
        Ok(())
    }

    pub fn load_gen_tests<F, C, W>(
        &mut self,
        files: &F,
        classifier: &C,
        warnings: &mut W,
    ) -> Result<(), SipfileError>
    where
        F: PackageFiles + ?Sized,
        C: SourceClassifier + ?Sized,
        W: WarningSink + ?Sized,
    {
        self.gen_tests = load_gen_tests(&self.config, files, classifier, warnings)?;
        Ok(())
    }

    /// True if `test` is declared as static or generated.
    pub fn is_specified(&self, test: &str) -> bool {
        self.static_tests.contains(test) || self.gen_tests.contains_key(test)
    }

    /// Names of input files (`*.in`) among `files` whose test is neither
    /// static nor generated, sorted and deduplicated.
    pub fn unspecified_tests<'a>(&self, files: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let unspecified: BTreeSet<String> = files
            .into_iter()
            .filter_map(|file| {
                let name = file.rsplit('/').next().unwrap_or(file);
                name.strip_suffix(INPUT_EXTENSION)
            })
            .filter(|test| !test.is_empty() && !self.is_specified(test))
            .map(str::to_string)
            .collect();
        unspecified.into_iter().collect()
    }
}
