//! Opt-in tracing output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lexis_scope=debug` or `RUST_LOG=lexis_scope=trace`;
/// set `LEXIS_LOG_TREE=1` as well to print spans as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let tree = std::env::var_os("LEXIS_LOG_TREE").is_some();
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with((!tree).then(|| fmt::layer().with_target(true).with_level(true)))
                .with(tree.then(|| HierarchicalLayer::new(2).with_targets(true)))
                .with(filter)
                .init();
        }
    });
}
