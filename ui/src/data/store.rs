//! The dataset table: one immutable [`Dataset`] per [`FilterKey`].

use once_cell::sync::Lazy;
use rand::Rng;

use crate::config::{amplitude_factor, palette, WINDOW_LEN};

use super::generator::generate_time_series_with;
use super::{BarPoint, DashboardStats, Dataset, FilterKey, PiePoint};

static SHARED: Lazy<DatasetStore> = Lazy::new(DatasetStore::build);

/// Read-only lookup from filter to dataset.
///
/// Indexed by [`FilterKey::index`], so every key resolves; there is no
/// fallible path.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    datasets: [Dataset; FilterKey::ALL.len()],
}

impl DatasetStore {
    /// The process-wide store, built on first use.
    pub fn shared() -> &'static DatasetStore {
        &SHARED
    }

    pub fn build() -> Self {
        Self::build_with(&mut rand::thread_rng())
    }

    pub fn build_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let datasets = FilterKey::ALL.map(|key| Dataset {
            time_series: generate_time_series_with(rng, WINDOW_LEN, amplitude_factor(key)),
            bar_data: bar_data(key),
            pie_data: pie_data(key),
            stats: stats(key),
        });
        Self { datasets }
    }

    pub fn get(&self, key: FilterKey) -> &Dataset {
        &self.datasets[key.index()]
    }
}

fn bar(name: &str, sales: i64, color: &'static str) -> BarPoint {
    BarPoint {
        name: name.to_string(),
        sales,
        color,
    }
}

fn slice(name: &str, value: i64, color: &'static str) -> PiePoint {
    PiePoint {
        name: name.to_string(),
        value,
        color,
    }
}

fn product_bar(key: FilterKey) -> Option<BarPoint> {
    let (sales, color) = match key {
        FilterKey::All => return None,
        FilterKey::ProductA => (4_000, palette::PURPLE),
        FilterKey::ProductB => (3_000, palette::GREEN),
        FilterKey::ProductC => (2_000, palette::YELLOW),
        FilterKey::ProductD => (2_780, palette::ORANGE),
        FilterKey::ProductE => (1_890, palette::BLUE),
    };
    Some(bar(key.label(), sales, color))
}

fn bar_data(key: FilterKey) -> Vec<BarPoint> {
    match key {
        FilterKey::All => FilterKey::PRODUCTS
            .into_iter()
            .filter_map(product_bar)
            .collect(),
        product => product_bar(product).into_iter().collect(),
    }
}

fn pie_data(key: FilterKey) -> Vec<PiePoint> {
    match key {
        FilterKey::All => vec![
            slice("Electronics", 400, palette::BLUE),
            slice("Fashion", 300, palette::TEAL),
            slice("Groceries", 300, palette::AMBER),
            slice("Home Goods", 200, palette::ORANGE),
        ],
        FilterKey::ProductA => vec![slice("Electronics", 400, palette::BLUE)],
        FilterKey::ProductB => vec![slice("Fashion", 300, palette::TEAL)],
        FilterKey::ProductC => vec![slice("Groceries", 300, palette::AMBER)],
        FilterKey::ProductD => vec![slice("Home Goods", 250, palette::ORANGE)],
        FilterKey::ProductE => vec![slice("Electronics", 150, palette::BLUE)],
    }
}

fn stats(key: FilterKey) -> DashboardStats {
    let (revenue, users, orders, growth) = match key {
        FilterKey::All => (123_456, 7_890, 4_321, 15),
        FilterKey::ProductA => (45_000, 2_100, 850, 5),
        FilterKey::ProductB => (32_000, 1_500, 600, 8),
        FilterKey::ProductC => (21_000, 950, 400, -2),
        FilterKey::ProductD => (29_000, 1_100, 480, 12),
        FilterKey::ProductE => (19_500, 800, 320, 3),
    };
    DashboardStats {
        revenue,
        users,
        orders,
        growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn store() -> DatasetStore {
        DatasetStore::build_with(&mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn every_key_has_non_empty_bar_and_pie_data() {
        let store = store();
        for key in FilterKey::ALL {
            let dataset = store.get(key);
            assert!(!dataset.bar_data.is_empty(), "{key} has no bars");
            assert!(!dataset.pie_data.is_empty(), "{key} has no slices");
            assert_eq!(dataset.time_series.len(), WINDOW_LEN);
        }
    }

    #[test]
    fn product_datasets_are_singletons_for_their_product() {
        let store = store();
        for key in FilterKey::PRODUCTS {
            let dataset = store.get(key);
            assert_eq!(dataset.bar_data.len(), 1);
            assert_eq!(dataset.bar_data[0].name, key.label());
            assert_eq!(dataset.pie_data.len(), 1);
        }
    }

    #[test]
    fn aggregate_lists_every_product_bar() {
        let store = store();
        let names: Vec<_> = store
            .get(FilterKey::All)
            .bar_data
            .iter()
            .map(|b| b.name.clone())
            .collect();
        let expected: Vec<_> = FilterKey::PRODUCTS.iter().map(|k| k.label().to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn product_c_is_shrinking() {
        assert_eq!(store().get(FilterKey::ProductC).stats.growth, -2);
    }

    #[test]
    fn shared_store_is_a_single_instance() {
        let a = DatasetStore::shared() as *const DatasetStore;
        let b = DatasetStore::shared() as *const DatasetStore;
        assert_eq!(a, b);
    }
}
