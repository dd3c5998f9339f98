//! Diagnostics on stderr
//!
//! Stdout carries the launcher JSON, so log lines must never go there.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "jetbrains_projects=debug"
    } else {
        "jetbrains_projects=warn"
    }
}

/// Install the global subscriber; `RUST_LOG` wins over `verbose`
pub fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
