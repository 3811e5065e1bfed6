//! Shared UI crate for Pulseboard. Data, state and views live here; the
//! `web` and `desktop` crates only launch them.

use dioxus::prelude::*;

pub mod charts;
pub mod components;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;

pub use dashboard::Dashboard;

/// Shared theme as a bundled asset. Desktop inlines the same file instead.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
