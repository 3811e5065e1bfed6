//! Data types shared by the store, the controller and the charts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Headline numbers for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub revenue: i64,
    pub users: i64,
    pub orders: i64,
    /// Signed percentage; negative for shrinking products.
    pub growth: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    pub name: String,
    pub uv: i64,
    pub pv: i64,
}

impl TimeSeriesPoint {
    pub fn value(&self, key: SeriesKey) -> i64 {
        match key {
            SeriesKey::Uv => self.uv,
            SeriesKey::Pv => self.pv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPoint {
    /// Product label; clicking the bar filters by it when it names a product.
    pub name: String,
    pub sales: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiePoint {
    pub name: String,
    pub value: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Oldest point first.
    pub time_series: Vec<TimeSeriesPoint>,
    pub bar_data: Vec<BarPoint>,
    pub pie_data: Vec<PiePoint>,
    pub stats: DashboardStats,
}

impl Dataset {
    /// Drops the oldest point and appends `point`, keeping the window length.
    pub fn slide_window(&mut self, point: TimeSeriesPoint) {
        if !self.time_series.is_empty() {
            self.time_series.remove(0);
        }
        self.time_series.push(point);
    }
}

/// Dataset selector. `All` is the aggregate view; each product has its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    ProductA,
    ProductB,
    ProductC,
    ProductD,
    ProductE,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterKeyError {
    #[error("unknown filter `{0}`")]
    Unknown(String),
}

impl FilterKey {
    pub const ALL: [FilterKey; 6] = [
        FilterKey::All,
        FilterKey::ProductA,
        FilterKey::ProductB,
        FilterKey::ProductC,
        FilterKey::ProductD,
        FilterKey::ProductE,
    ];

    pub const PRODUCTS: [FilterKey; 5] = [
        FilterKey::ProductA,
        FilterKey::ProductB,
        FilterKey::ProductC,
        FilterKey::ProductD,
        FilterKey::ProductE,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::All => "All",
            FilterKey::ProductA => "Product A",
            FilterKey::ProductB => "Product B",
            FilterKey::ProductC => "Product C",
            FilterKey::ProductD => "Product D",
            FilterKey::ProductE => "Product E",
        }
    }

    /// Position in [`FilterKey::ALL`]; used to index the dataset table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_product(self) -> bool {
        self != FilterKey::All
    }

    /// Maps a bar label back to a product filter.
    ///
    /// Anything that is not a product label (including `"All"`) yields
    /// `None`, so click payloads from the chart can be dropped without
    /// reaching the controller.
    pub fn from_bar_label(label: &str) -> Option<FilterKey> {
        label
            .parse::<FilterKey>()
            .ok()
            .filter(|key| key.is_product())
    }
}

impl FromStr for FilterKey {
    type Err = FilterKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.label() == raw)
            .ok_or_else(|| FilterKeyError::Unknown(raw.to_string()))
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two line series of the sales chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Uv,
    Pv,
}

impl SeriesKey {
    pub fn data_key(self) -> &'static str {
        match self {
            SeriesKey::Uv => "uv",
            SeriesKey::Pv => "pv",
        }
    }
}

/// Which line series are drawn. Display-only; the data is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleSeries {
    pub uv: bool,
    pub pv: bool,
}

impl Default for VisibleSeries {
    fn default() -> Self {
        Self { uv: true, pv: true }
    }
}

impl VisibleSeries {
    pub fn is_visible(&self, key: SeriesKey) -> bool {
        match key {
            SeriesKey::Uv => self.uv,
            SeriesKey::Pv => self.pv,
        }
    }

    pub fn toggle(&mut self, key: SeriesKey) {
        match key {
            SeriesKey::Uv => self.uv = !self.uv,
            SeriesKey::Pv => self.pv = !self.pv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, uv: i64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            name: name.into(),
            uv,
            pv: uv,
        }
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for key in FilterKey::ALL {
            assert_eq!(key.label().parse::<FilterKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = "Product Z".parse::<FilterKey>().unwrap_err();
        assert_eq!(err, FilterKeyError::Unknown("Product Z".into()));
        assert_eq!(err.to_string(), "unknown filter `Product Z`");
    }

    #[test]
    fn bar_labels_only_map_products() {
        assert_eq!(FilterKey::from_bar_label("Product C"), Some(FilterKey::ProductC));
        assert_eq!(FilterKey::from_bar_label("All"), None);
        assert_eq!(FilterKey::from_bar_label("product c"), None);
        assert_eq!(FilterKey::from_bar_label(""), None);
    }

    #[test]
    fn index_matches_table_position() {
        for (idx, key) in FilterKey::ALL.into_iter().enumerate() {
            assert_eq!(key.index(), idx);
        }
    }

    #[test]
    fn slide_window_keeps_length() {
        let mut dataset = Dataset {
            time_series: vec![point("a", 1), point("b", 2), point("c", 3)],
            bar_data: Vec::new(),
            pie_data: Vec::new(),
            stats: DashboardStats::default(),
        };
        dataset.slide_window(point("d", 4));
        let names: Vec<_> = dataset.time_series.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "d"]);
    }

    #[test]
    fn toggle_flips_a_single_flag() {
        let mut visible = VisibleSeries::default();
        visible.toggle(SeriesKey::Pv);
        assert_eq!(visible, VisibleSeries { uv: true, pv: false });
        visible.toggle(SeriesKey::Pv);
        assert_eq!(visible, VisibleSeries::default());
    }
}
