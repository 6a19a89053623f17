//! Bibim interpreter driver.
//!
//! The `bibim` binary is a thin argument dispatcher over [`commands`].
//! [`reporting`] turns every phase's error type into a
//! [`Diagnostic`](bibim_diagnostic::Diagnostic).

pub mod commands;
pub mod reporting;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=bibim_eval=debug`
/// to log every scheduler step. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
