//! This module provides the logging hooks used by the block-level helpers and
//! the column bridge.
//!
//! Per-value codecs stay silent; decisions that affect a whole block (which
//! scale was chosen, why a block fell back to raw memory) are reported through
//! the `log` facade so the host application decides where they go.

use log::LevelFilter;
use std::sync::Once;

/// Logs a structured key-value metric line at `debug` level, only in debug builds.
///
/// The line is emitted under the `simple8b_types::metric` target so it can be
/// filtered separately from ordinary diagnostics.
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!(target: "simple8b_types::metric", "S8B_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at the given level.
///
/// Safe to call more than once; only the first call has any effect, and an
/// already-installed global logger is left untouched.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}
