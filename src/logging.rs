use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const ENV_LOG: &str = "SKILLSHARE_LOG";

/// Installs the global subscriber. Diagnostics go to stderr so they never mix
/// with command output.
///
/// The filter comes from `SKILLSHARE_LOG` (default `warn`). Passing `true`
/// forces the `debug` level.
pub fn init(debug: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter_layer = if debug {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_env(ENV_LOG).or_else(|_| EnvFilter::try_new("warn"))?
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
