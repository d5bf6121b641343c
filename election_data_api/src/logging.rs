//! Log setup for the binaries. Library code only uses the `log` macros.

use env_logger::Env;

/// Log to stderr at info level, unless overridden with RUST_LOG.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
