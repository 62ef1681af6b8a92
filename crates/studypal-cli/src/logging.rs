use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `STUDYPAL_LOG` overrides the configured filter.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env("STUDYPAL_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
