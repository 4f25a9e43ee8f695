use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the exerciser's own output on stdout streams
/// through untouched.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
