//! Logger setup for the `playlog` binary.

use std::io::Write;

use log::LevelFilter;

/// Level forced by `-v`/`-q`, or `None` to defer to `RUST_LOG` (default `info`).
pub(crate) fn level_override(verbose: u8, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        return Some(LevelFilter::Warn);
    }
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install `env_logger` writing `[YYYY-MM-DD HH:MM:SS UTC] message` lines to stdout.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level_override(verbose, quiet) {
        builder.filter_level(level);
    }
    builder
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
