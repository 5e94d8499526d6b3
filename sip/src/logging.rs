//! Tracing setup for the `sip` binary.
//!
//! Sipfile warnings reach this subscriber only through `TracingWarnings`,
//! the sink [`Sipfile::load`](crate::sipfile::Sipfile::load) passes to the
//! section loaders, as `warn` events visible under the default filter.
//! Callers that need the warnings as values pass a `Vec<Warning>` to
//! [`Sipfile::reload_from_str`](crate::sipfile::Sipfile::reload_from_str)
//! instead, and nothing is logged for them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: Sipfile warnings and nothing chattier.
const DEFAULT_FILTER: &str = "warn";

/// Install the subscriber for the `sip` binary, filtered by `RUST_LOG`.
///
/// `RUST_LOG=sip=debug` adds snapshot sizes, per-section counts and each
/// resolved generator. Events go to stderr so `sip tests --json` stays
/// parseable on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
