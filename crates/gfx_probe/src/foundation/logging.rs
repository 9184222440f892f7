//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter level
///
/// Environment overrides (`RUST_LOG`) still take precedence over the
/// provided default, which is what diagnostic binaries want: quiet by
/// default, verbose on demand.
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
