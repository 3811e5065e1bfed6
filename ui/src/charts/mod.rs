//! SVG chart components used by the dashboard.
//!
//! Layout math lives in [`geometry`] and the `layout_*` helpers so it can be
//! unit tested; the components only turn it into markup and track hover.

mod bar;
pub mod geometry;
mod line;
mod pie;
mod tooltip;

pub use bar::{bar_click_target, ProductBarChart};
pub use line::{layout_lines, series_label, LineLayout, SalesLineChart};
pub use pie::{layout_donut, CategoryPieChart, DonutSlice};
pub use tooltip::{ChartTooltip, TooltipEntry};
