use tracing_subscriber::{fmt, EnvFilter};

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level`, normally
/// `AppConfig::log_level`, is the filter.
/// A second call is a no-op so test binaries can call it freely.
pub fn init_tracing(default_level: &str) {
    let installed = fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(true)
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
}
