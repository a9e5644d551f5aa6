use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// command output.
///
/// `RUST_LOG` wins over `-v`, which wins over the configured level.
pub(super) fn init(verbosity: u8, configured: Option<&str>) {
    let default = match verbosity {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
