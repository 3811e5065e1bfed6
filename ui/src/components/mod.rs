//! Presentation building blocks shared by the dashboard view.

pub mod app_navbar;
pub use app_navbar::AppNavbar;

mod card;
pub use card::{Card, CardSkeleton, CardTitle};

mod filter_button;
pub use filter_button::FilterButton;

mod header;
pub use header::DashboardHeader;

mod stat_card;
pub use stat_card::{AnimatedCounter, StatCard, StatsGrid};
