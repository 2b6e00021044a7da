//! Diagnostic tracing for the demo driver.
//!
//! Only [`crate::demo`] emits events; the pattern cores stay silent. What shows
//! up at each level:
//!
//! - `info`: one `running demonstration` event per section, with `section`.
//! - `debug`: `sorted input` (`strategy`, `len`), `chain built` (`depth`),
//!   `request routed` (`request`, `handled`), `collection drained` (`count`).
//!
//! Events go to stderr, so stdout carries only the demonstration and its text
//! or JSON stays byte-identical whatever `RUST_LOG` says.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` picks the level; `warn` when unset.
///
/// ```bash
/// RUST_LOG=patterns=debug patterns chain
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
