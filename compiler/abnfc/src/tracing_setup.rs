//! Tracing subscriber setup for the `abnf` binary.
//!
//! Nothing is installed unless `RUST_LOG` is set, so a plain run prints
//! only reports. Typical use:
//!
//! ```text
//! RUST_LOG=abnf_core=trace abnf check grammar.abnf
//! RUST_LOG=abnfc=debug abnf check a.abnf b.abnf
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once; later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
