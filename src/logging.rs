//! Logging infrastructure over `env_logger`
//!
//! Diagnostic logging is separate from the per-region status lines the tool
//! prints; those always go to stdout regardless of the log level.

use log::{debug, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize the logging system (should be called once at application startup)
///
/// Configure levels via the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Enable all debug logs
/// - `RUST_LOG=info` - Info and above
/// - `RUST_LOG=keymaster=debug` - Module-specific levels
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

/// Initialize logging for test environments
///
/// Use this in test modules to avoid initialization conflicts
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Logs the outcome of a single per-region provider call.
pub fn log_region_operation(operation: &str, region: &str, success: bool) {
    if success {
        debug!("Region operation succeeded: {operation} ({region})");
    } else {
        warn!("Region operation failed: {operation} ({region})");
    }
}
