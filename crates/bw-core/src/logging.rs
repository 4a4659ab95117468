//! Logging setup for the BloomWatch CLI.
//!
//! stdout is reserved for command payloads; all diagnostics go to
//! stderr. `BW_LOG` (an `EnvFilter` directive) overrides the
//! verbosity flags when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at startup; later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("BW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
