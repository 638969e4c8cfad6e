//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize logging to stderr
///
/// Logs at `Info` by default and `Debug` when `verbose` is set. An explicit
/// `RUST_LOG` overrides both. Calling this more than once is harmless; later
/// calls are ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
