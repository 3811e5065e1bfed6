//! Logger setup shared by the launchers.

use dioxus::logger::tracing::{info, Level};

use super::platform;

/// Installs the Dioxus tracing subscriber. Debug builds log at `DEBUG`,
/// release builds at `INFO`. Safe to call more than once.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if dioxus::logger::init(level).is_ok() {
        info!(%level, host = %platform::platform_string(), "logger ready");
    }
}
