//! Compile-time configuration for the dashboard.
//!
//! Everything here is fixed at build time: timer durations, spring constants,
//! per-dataset amplitudes, the chart palette and the descriptors the stat grid
//! and line chart iterate over. Nothing is read from the environment.

use crate::data::{DashboardStats, FilterKey, SeriesKey};

/// Delay before the simulated initial load completes.
pub const INITIAL_LOAD_MS: u64 = 2_000;
/// Interval between live refresh ticks of the "All" time series.
pub const DATA_UPDATE_MS: u64 = 2_500;
/// Delay between a filter change and the pie chart picking up its new slices.
pub const PIE_TRANSITION_MS: u64 = 300;

/// Number of points in every generated time series (and in the live window).
pub const WINDOW_LEN: usize = 20;

/// Amplitude used for freshly generated live points.
pub const LIVE_POINT_FACTOR: f64 = 2_000.0;
/// Upper bound of the random jitter added to live points.
pub const LIVE_POINT_JITTER: f64 = 1_000.0;

/// Frame period for counter animation (~60 fps).
pub const COUNTER_FRAME_MS: u64 = 16;

/// Spring constants for animated counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

pub const SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 40.0,
    mass: 1.0,
    rest_delta: 0.01,
    rest_speed: 0.01,
};

impl Default for SpringConfig {
    fn default() -> Self {
        SPRING
    }
}

/// Timing values consumed by the dashboard controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub initial_load_ms: u64,
    pub data_update_ms: u64,
    pub pie_transition_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_load_ms: INITIAL_LOAD_MS,
            data_update_ms: DATA_UPDATE_MS,
            pie_transition_ms: PIE_TRANSITION_MS,
        }
    }
}

/// Sine/cosine amplitude for each dataset's generated series.
pub fn amplitude_factor(key: FilterKey) -> f64 {
    match key {
        FilterKey::All => 2_000.0,
        FilterKey::ProductA => 1_500.0,
        FilterKey::ProductB => 1_200.0,
        FilterKey::ProductC => 800.0,
        FilterKey::ProductD => 1_000.0,
        FilterKey::ProductE => 700.0,
    }
}

pub mod palette {
    pub const PURPLE: &str = "#8884d8";
    pub const GREEN: &str = "#82ca9d";
    pub const YELLOW: &str = "#ffc658";
    pub const ORANGE: &str = "#ff8042";
    pub const BLUE: &str = "#0088FE";
    pub const TEAL: &str = "#00C49F";
    pub const AMBER: &str = "#FFBB28";

    pub const BACKGROUND: &str = "var(--bg-color)";

    pub const ACCENT: &str = "var(--accent-color)";
    pub const SECONDARY: &str = "var(--secondary-color)";
    pub const MUTED: &str = "var(--text-muted-color)";
}

/// Which statistic a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Revenue,
    Users,
    Orders,
    Growth,
}

/// Descriptor for one card in the stats grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCardSpec {
    pub kind: StatKind,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl StatCardSpec {
    pub fn id(&self) -> &'static str {
        match self.kind {
            StatKind::Revenue => "revenue",
            StatKind::Users => "users",
            StatKind::Orders => "orders",
            StatKind::Growth => "growth",
        }
    }

    pub fn value(&self, stats: &DashboardStats) -> i64 {
        match self.kind {
            StatKind::Revenue => stats.revenue,
            StatKind::Users => stats.users,
            StatKind::Orders => stats.orders,
            StatKind::Growth => stats.growth,
        }
    }

    /// Sign shown ahead of the counter. Only growth carries an explicit `+`.
    pub fn sign(&self, value: i64) -> &'static str {
        match self.kind {
            StatKind::Growth if value >= 0 => "+",
            _ => "",
        }
    }

    /// Colour override for the value, if the card has one.
    pub fn tone(&self, value: i64) -> Option<&'static str> {
        match self.kind {
            StatKind::Growth if value >= 0 => Some(palette::ACCENT),
            StatKind::Growth => Some(palette::SECONDARY),
            _ => None,
        }
    }
}

pub const STAT_CARDS: [StatCardSpec; 4] = [
    StatCardSpec {
        kind: StatKind::Revenue,
        prefix: "$",
        suffix: "",
    },
    StatCardSpec {
        kind: StatKind::Users,
        prefix: "",
        suffix: "",
    },
    StatCardSpec {
        kind: StatKind::Orders,
        prefix: "",
        suffix: "",
    },
    StatCardSpec {
        kind: StatKind::Growth,
        prefix: "",
        suffix: "%",
    },
];

/// Descriptor for one line of the sales chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeriesSpec {
    pub key: SeriesKey,
    pub color: &'static str,
}

pub const LINE_SERIES: [LineSeriesSpec; 2] = [
    LineSeriesSpec {
        key: SeriesKey::Uv,
        color: palette::ACCENT,
    },
    LineSeriesSpec {
        key: SeriesKey::Pv,
        color: palette::SECONDARY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_tone_follows_sign() {
        let growth = STAT_CARDS[3];
        assert_eq!(growth.tone(15), Some(palette::ACCENT));
        assert_eq!(growth.tone(0), Some(palette::ACCENT));
        assert_eq!(growth.tone(-2), Some(palette::SECONDARY));
        assert_eq!(growth.sign(-2), "");
        assert_eq!(growth.sign(3), "+");
    }

    #[test]
    fn only_growth_is_toned() {
        for card in STAT_CARDS.iter().filter(|c| c.kind != StatKind::Growth) {
            assert_eq!(card.tone(-10), None);
            assert_eq!(card.sign(10), "");
        }
    }

    #[test]
    fn aggregate_amplitude_dominates_products() {
        let all = amplitude_factor(FilterKey::All);
        for key in FilterKey::PRODUCTS {
            assert!(amplitude_factor(key) < all);
        }
    }
}
