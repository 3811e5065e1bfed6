use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use crate::core::format;
use crate::data::{BarPoint, FilterKey};

use super::geometry::{self, Frame, LinearScale};
use super::tooltip::{ChartTooltip, TooltipEntry};

const FRAME: Frame = Frame {
    width: 640.0,
    height: 300.0,
    left: 88.0,
    right: 24.0,
    top: 12.0,
    bottom: 32.0,
};
const X_TICKS: usize = 4;
/// Fraction of a category band taken by its bar.
const BAR_FILL: f64 = 0.7;

/// Filter a click on `bar` should switch to. Bars whose label does not
/// name a product are inert.
pub fn bar_click_target(bar: &BarPoint) -> Option<FilterKey> {
    FilterKey::from_bar_label(&bar.name)
}

#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    name: String,
    color: &'static str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    band_y: f64,
    band: f64,
    label_y: f64,
    target: Option<FilterKey>,
}

fn layout_bars(data: &[BarPoint], scale: &LinearScale) -> Vec<BarRect> {
    let band = FRAME.plot_height() / data.len().max(1) as f64;
    let height = band * BAR_FILL;
    data.iter()
        .enumerate()
        .map(|(idx, bar)| {
            let band_top = FRAME.plot_top() + band * idx as f64;
            BarRect {
                name: bar.name.clone(),
                color: bar.color,
                x: FRAME.plot_left(),
                y: band_top + (band - height) / 2.0,
                width: (scale.map(bar.sales as f64) - FRAME.plot_left()).max(0.0),
                height,
                band_y: band_top,
                band,
                label_y: band_top + band / 2.0,
                target: bar_click_target(bar),
            }
        })
        .collect()
}

#[component]
pub fn ProductBarChart(data: Vec<BarPoint>, on_select: EventHandler<FilterKey>) -> Element {
    let _lang = crate::i18n::use_language();
    let mut hovered = use_signal(|| None::<usize>);

    if data.is_empty() {
        return rsx! {
            p { class: "chart-empty", {crate::t!("chart-empty")} }
        };
    }

    let max = data.iter().map(|bar| bar.sales).max().unwrap_or(0) as f64;
    let top = geometry::nice_ceiling(max);
    let scale = LinearScale::new((0.0, top), (FRAME.plot_left(), FRAME.plot_right()));
    let bars = layout_bars(&data, &scale);
    let ticks: Vec<(String, f64)> = geometry::ticks(max, X_TICKS)
        .into_iter()
        .map(|value| (format::format_number(value), scale.map(value)))
        .collect();

    let tooltip = hovered().and_then(|idx| data.get(idx)).map(|bar| {
        (
            bar.name.clone(),
            vec![TooltipEntry {
                name: crate::t!("bar-sales-label"),
                value: bar.sales,
                color: bar.color,
            }],
        )
    });

    let view_box = FRAME.view_box();
    let (plot_top, plot_bottom) = (FRAME.plot_top(), FRAME.plot_bottom());
    let (plot_left, plot_width) = (FRAME.plot_left(), FRAME.plot_width());
    let category_x = plot_left - 8.0;
    let tick_y = plot_bottom + 20.0;

    rsx! {
        div { class: "chart bar-chart",
            svg {
                class: "chart__svg",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                onmouseleave: move |_| hovered.set(None),

                for (label, x) in ticks {
                    g { key: "x-{label}",
                        line {
                            class: "chart__grid",
                            x1: "{x}",
                            x2: "{x}",
                            y1: "{plot_top}",
                            y2: "{plot_bottom}",
                        }
                        text {
                            class: "chart__tick",
                            x: "{x}",
                            y: "{tick_y}",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                }

                for (idx, bar) in bars.into_iter().enumerate() {
                    g { key: "{bar.name}",
                        class: if bar.target.is_some() { "bar-chart__bar bar-chart__bar--clickable" } else { "bar-chart__bar" },
                        onmouseenter: move |_| hovered.set(Some(idx)),
                        onclick: move |_| {
                            match bar.target {
                                Some(key) => on_select.call(key),
                                None => trace!("bar without product target clicked"),
                            }
                        },
                        if hovered() == Some(idx) {
                            rect {
                                class: "bar-chart__cursor",
                                x: "{plot_left}",
                                y: "{bar.band_y}",
                                width: "{plot_width}",
                                height: "{bar.band}",
                            }
                        }
                        rect {
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            rx: "3",
                            fill: "{bar.color}",
                        }
                        text {
                            class: "chart__tick",
                            x: "{category_x}",
                            y: "{bar.label_y}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{bar.name}"
                        }
                    }
                }
            }

            if let Some((label, entries)) = tooltip {
                ChartTooltip { label, entries }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetStore;

    fn bar(name: &str, sales: i64) -> BarPoint {
        BarPoint {
            name: name.into(),
            sales,
            color: "#8884d8",
        }
    }

    #[test]
    fn product_bars_select_their_filter() {
        assert_eq!(bar_click_target(&bar("Product B", 3_000)), Some(FilterKey::ProductB));
    }

    #[test]
    fn non_product_bars_are_inert() {
        assert_eq!(bar_click_target(&bar("Electronics", 400)), None);
        assert_eq!(bar_click_target(&bar("All", 1)), None);
        assert_eq!(bar_click_target(&bar("", 1)), None);
    }

    #[test]
    fn aggregate_bars_all_map_to_products() {
        let all = DatasetStore::shared().get(FilterKey::All);
        let targets: Vec<_> = all.bar_data.iter().filter_map(bar_click_target).collect();
        assert_eq!(targets.len(), all.bar_data.len());
    }

    #[test]
    fn bar_width_is_proportional_to_sales() {
        let data = vec![bar("Product A", 4_000), bar("Product B", 2_000)];
        let scale = LinearScale::new((0.0, 4_000.0), (FRAME.plot_left(), FRAME.plot_right()));
        let bars = layout_bars(&data, &scale);
        assert!((bars[0].width - FRAME.plot_width()).abs() < 1e-9);
        assert!((bars[1].width * 2.0 - bars[0].width).abs() < 1e-9);
        assert!(bars[0].y < bars[1].y);
    }
}
