//! One-time `env_logger` setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Level used when `RUST_LOG` is unset: warn, then info, debug and trace
/// for each `-v`.
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Installs the global logger once; later calls are ignored.
///
/// `RUST_LOG` takes precedence over `verbosity`. Output goes to stderr so
/// `--json` results on stdout stay parseable.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(level_for(verbosity));
            }
        }
        builder.target(env_logger::Target::Stderr);
        builder.init();
        log::debug!("logging initialized");
    });
}
