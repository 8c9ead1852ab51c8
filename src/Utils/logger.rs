//! Console logger initialization
//!
//! The library itself only emits `log` records at pipeline stages and never configures
//! logging; consumers (or tests) that want to see those records call
//! [`init_console_logger`] once at startup.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Initialize a terminal logger at the given level
///
/// Repeated initialization attempts are ignored, so tests may call this freely.
pub fn init_console_logger(level: LevelFilter) {
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_init_is_harmless() {
        init_console_logger(LevelFilter::Info);
        init_console_logger(LevelFilter::Debug);
        log::info!("logger initialized");
    }
}
