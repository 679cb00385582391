//! Diagnostic tracing for the step runner.
//!
//! Operator-facing output (banner, skip notices, summaries) lives in `status`
//! and is always printed. This layer carries what the operator would
//! otherwise not see: the one-time warning when the prompt input hits end of
//! stream and every remaining step starts auto-confirming, plus spawn/exit
//! details for each step at `debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// The default is `warn`, so the end-of-stream auto-confirm warning shows up
/// without any configuration.
///
/// ```bash
/// RUST_LOG=step_script=debug step-script runbook.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
