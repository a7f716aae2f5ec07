//! Tracing configuration
//!
//! `RUST_LOG` always wins. Without it, development builds log at debug and
//! release builds at info, with per-crate directives for the engine and
//! adapters.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),   // Connection pool chatter
        "reqwest=info".to_string(), // Redirect and retry noise
        if is_dev { "tm_app=debug" } else { "tm_app=info" }.to_string(),
        if is_dev {
            "tm_infra=debug"
        } else {
            "tm_infra=info"
        }
        .to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Output goes to stderr so it never interleaves with the viewer's own
/// stdout output.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(std::io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
