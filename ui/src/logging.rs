//! `log` backend: `console_log` in the browser, `env_logger` everywhere else.

use log::Level;
use log::SetLoggerError;

pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    console_log::init_with_level(level)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
}
