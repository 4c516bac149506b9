use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// The log level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable, which takes precedence.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let env_filter = build_filter(level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(level, "hydrosa logging initialized");
    Ok(())
}

/// Build filter from RUST_LOG env var or use provided level
fn build_filter(level: &str) -> EnvFilter {
    let default_filter = format!("hydrosa={level},hydrosa_core={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
