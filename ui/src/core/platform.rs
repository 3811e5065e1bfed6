//! Platform detection and task spawning helpers.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Short description of the host, used in startup logs.
pub fn platform_string() -> String {
    match user_agent_string() {
        Some(agent) => format!("{} ({agent})", Platform::current().as_str()),
        None => format!("{} ({})", Platform::current().as_str(), std::env::consts::OS),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn user_agent_string() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().user_agent().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent_string() -> Option<String> {
    None
}

/// Spawns a future on the current Dioxus scope and hands back its task so
/// the caller can cancel it.
pub fn spawn_future<F>(future: F) -> Task
where
    F: Future<Output = ()> + 'static,
{
    spawn(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_report_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert!(platform_string().starts_with("desktop ("));
    }
}
