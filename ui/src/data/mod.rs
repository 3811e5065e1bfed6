//! Mock data: the model types, the series generator and the dataset table.

mod model;
pub use model::*;

pub mod generator;
pub use generator::{generate_next_point, generate_time_series};

mod store;
pub use store::DatasetStore;
