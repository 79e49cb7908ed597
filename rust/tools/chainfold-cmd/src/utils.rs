//! Common utilities for chainfold-cmd

use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honored; a non-zero `verbose` count overrides the default level.
pub fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}
