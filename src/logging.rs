// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logger setup for the `katas` binary.

use std::io::Write;

/// Initialize the logger.
///
/// If verbose is true, sets log level to Info, otherwise to Warn. `RUST_LOG`
/// overrides either (e.g. `RUST_LOG=snaking_katas=debug` shows search
/// statistics). Output format: `LEVEL target: message`, on stderr.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{:5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
