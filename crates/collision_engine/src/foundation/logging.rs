//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Log target used for collision diagnostics
pub const COLLISION_TARGET: &str = "collision";

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level, still overridable via `RUST_LOG`
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Emit a collision diagnostic line when the options ask for verbose output
///
/// ```
/// use collision_engine::{config::CollisionOptions, verbose};
///
/// let opts = CollisionOptions::default().with_verbose(true);
/// verbose!(opts, "outer distance is: {}", 0.5);
/// ```
#[macro_export]
macro_rules! verbose {
    ($opts:expr, $($arg:tt)+) => {
        if $opts.verbose {
            $crate::foundation::logging::debug!(target: $crate::foundation::logging::COLLISION_TARGET, $($arg)+);
        }
    };
}
