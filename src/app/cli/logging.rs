use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MEMFORGE_LOG";

/// Install the stderr subscriber. `verbose` overrides `MEMFORGE_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("memforge=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
