//! Platform-agnostic helpers shared by the dashboard and its components.

pub mod format;
pub mod logging;
pub mod platform;
pub mod timing;
