//! Non-fatal Sipfile conditions.

use std::fmt;

/// A condition that is reported but does not stop loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A static entry has content after its test range.
    IgnoredSuffix { range: String, suffix: String },
    /// A static test appears in more than one test range.
    DuplicateStaticTest { test: String },
    /// No source file under `utils/` matched the generator, so it is run as a
    /// shell command.
    GeneratorAsShellCommand { token: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::IgnoredSuffix { range, suffix } => write!(
                f,
                "Sipfile (static): ignoring invalid suffix: `{suffix}` of the entry with test range: {range}"
            ),
            Warning::DuplicateStaticTest { test } => write!(
                f,
                "Sipfile (static): test `{test}` is specified in more than one test range"
            ),
            Warning::GeneratorAsShellCommand { token } => write!(
                f,
                "Sipfile (gen): no file in utils/ matches specified generator: `{token}`. \
                 It will be treated as a shell command.\n  \
                 To remove this warning you have to choose one of the following options:\n    \
                 1. Provide full path to the generator file e.g. utils/gen1.cpp\n    \
                 2. If it is a shell command, prefix the generator with sh: - e.g. sh:echo"
            ),
        }
    }
}

/// Receiver for [`Warning`]s raised while loading.
pub trait WarningSink {
    fn warn(&mut self, warning: Warning);
}

/// Sink that forwards every warning to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
    }
}

impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}
