//! Logging initialization
//!
//! One entry point, [`init`], installs the global subscriber for the
//! `viewtmpl` binary. Library code only emits events.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Crates whose events the default filters let through
const CRATE_TARGETS: [&str; 3] = ["viewtmpl_core", "viewtmpl_store", "viewtmpl"];

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines on stderr, including skipped passes
    Development,
    /// One JSON object per event on stderr, operation boundaries only
    Production,
    /// Nothing installed; tests use `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter directives used when `RUST_LOG` is unset
    ///
    /// Development keeps the engine's `debug` events (skipped passes,
    /// unresolvable references); production keeps `start`/`end` only.
    pub fn default_directives(self) -> String {
        let level = match self {
            Profile::Development => "debug",
            Profile::Production => "info",
            Profile::Test => "off",
        };
        CRATE_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Later calls are no-ops, whatever profile they pass. `RUST_LOG` takes
/// precedence over [`Profile::default_directives`]. Logs always go to
/// stderr so `compare --format summary` can write the report to stdout.
///
/// # Example
///
/// ```
/// use viewtmpl_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.env_filter())
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.env_filter())
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
