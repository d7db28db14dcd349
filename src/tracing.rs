use tracing_subscriber::EnvFilter;

/// Log level from `-v`/`-q` counts. `RUST_LOG` overrides it when set.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr; stdout is reserved for the chart.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "../tests/src_inline/tracing.rs"]
mod tests;
