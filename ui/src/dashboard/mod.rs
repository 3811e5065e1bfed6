//! The dashboard: state controller, its Dioxus binding and the view.

pub mod controller;
mod counter;
mod hook;
mod view;

pub use controller::{DashboardController, DashboardView, Timer, TimerEvent, TimerHost};
pub use counter::SpringCounter;
pub use hook::{use_dashboard, DashboardHandle};
pub use view::Dashboard;
