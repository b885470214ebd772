//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Pipeline diagnostics are printed as plain progress lines on stdout.
/// With `quiet` (JSON output) only warnings are shown, on stderr, so that
/// stdout stays machine-readable. `RUST_LOG` overrides the level.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, true) => "debug",
        (false, false) => "info",
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_level(verbose)
        .without_time();

    if quiet {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.with_writer(std::io::stdout).init();
    }
}
