//! Loading of the `static` and `gen` Sipfile sections.
//!
//! Entries are processed in declaration order. Each entry's range is fully
//! validated before any of its tests is recorded.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::core::config::SipfileConfig;
use crate::core::generator::{GeneratorRef, PackageFiles, SourceClassifier, resolve_generator};
use crate::core::range::expand;
use crate::core::warnings::{Warning, WarningSink};
use crate::error::SipfileError;

pub const STATIC_VAR: &str = "static";
pub const GEN_VAR: &str = "gen";

/// Recipe for a generated test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenTest {
    pub generator: GeneratorRef,
    /// Arguments passed to the generator, verbatim.
    pub args: String,
}

/// Static test names; duplicates across entries only warn.
pub fn load_static_tests<W>(
    config: &SipfileConfig,
    warnings: &mut W,
) -> Result<BTreeSet<String>, SipfileError>
where
    W: WarningSink + ?Sized,
{
    let entries = config.var(STATIC_VAR)?.expect_array(STATIC_VAR)?;

    let mut tests = BTreeSet::new();
    for entry in &entries {
        let (range, rest) = next_token(entry);
        if range.is_empty() {
            continue;
        }
        let rest = rest.trim_end();
        if !rest.is_empty() {
            warnings.warn(Warning::IgnoredSuffix {
                range: range.to_string(),
                suffix: rest.to_string(),
            });
        }

        for test in expand(range)? {
            if tests.contains(&test) {
                warnings.warn(Warning::DuplicateStaticTest { test });
            } else {
                tests.insert(test);
            }
        }
    }
    debug!(entries = entries.len(), tests = tests.len(), "loaded static tests");
    Ok(tests)
}

/// Generated tests keyed by name; a test named by two entries is fatal.
///
/// Each entry's generator is resolved once against `files` and shared by every
/// test the entry's range expands to.
pub fn load_gen_tests<F, C, W>(
    config: &SipfileConfig,
    files: &F,
    classifier: &C,
    warnings: &mut W,
) -> Result<BTreeMap<String, GenTest>, SipfileError>
where
    F: PackageFiles + ?Sized,
    C: SourceClassifier + ?Sized,
    W: WarningSink + ?Sized,
{
    let entries = config.var(GEN_VAR)?.expect_array(GEN_VAR)?;

    let mut tests = BTreeMap::new();
    for entry in &entries {
        let (range, rest) = next_token(entry);
        let (token, args) = next_token(rest);
        if token.is_empty() {
            return Err(SipfileError::MissingGenerator {
                range: range.to_string(),
            });
        }
        let args = args.trim_end();

        let names = expand(range)?;
        let generator = resolve_generator(token, files, classifier, warnings)?;
        debug!(range, %generator, "resolved generator");
        for test in names {
            if tests.contains_key(&test) {
                return Err(SipfileError::DuplicateGeneratedTest { test });
            }
            tests.insert(
                test,
                GenTest {
                    generator: generator.clone(),
                    args: args.to_string(),
                },
            );
        }
    }
    debug!(entries = entries.len(), tests = tests.len(), "loaded generated tests");
    Ok(tests)
}

/// First whitespace-delimited token of `text` and whatever follows it, with
/// the whitespace between them removed.
fn next_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    let (token, rest) = text.split_at(end);
    (token, rest.trim_start())
}
