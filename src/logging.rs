//! Log output for the desktop app.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=csvsheet=debug` to see every
//! command applied to the sheet. Defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    if let Err(err) = tracing_subscriber::registry().with(console_layer).try_init() {
        eprintln!("Warning: could not initialize logging: {err}");
    }
}
