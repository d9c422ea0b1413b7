//! Tracing initialization for the fog-uri binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set, from the number of `-v` flags.
pub fn default_level(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Initialize tracing with human-readable output on stderr.
///
/// `RUST_LOG` takes precedence over `verbosity`. Stdout is left to command
/// output so results stay scriptable.
pub fn init_tracing(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(true)
		.without_time();

	// A subscriber may already be installed (e.g. by an embedding test harness).
	if let Err(error) = tracing_subscriber::registry()
		.with(filter)
		.with(fmt_layer)
		.try_init()
	{
		tracing::debug!(%error, "keeping the already installed tracing subscriber");
	}
}
