use dioxus::prelude::*;

use crate::data::PiePoint;

use super::geometry::{self, SliceAngles};
use super::tooltip::{ChartTooltip, TooltipEntry};

const SIZE: f64 = 300.0;
const INNER_RADIUS: f64 = 60.0;
const OUTER_RADIUS: f64 = 100.0;
const PADDING_DEGREES: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub name: String,
    pub value: i64,
    pub color: &'static str,
    pub angles: SliceAngles,
    pub path: String,
}

pub fn layout_donut(data: &[PiePoint]) -> Vec<DonutSlice> {
    let values: Vec<f64> = data.iter().map(|slice| slice.value as f64).collect();
    let center = SIZE / 2.0;
    geometry::pie_slices(&values, PADDING_DEGREES.to_radians())
        .into_iter()
        .zip(data)
        .map(|(angles, point)| DonutSlice {
            name: point.name.clone(),
            value: point.value,
            color: point.color,
            angles,
            path: geometry::donut_path(center, center, INNER_RADIUS, OUTER_RADIUS, angles),
        })
        .collect()
}

/// Donut of category shares. `leaving` marks slices that are about to be
/// replaced so they can fade out.
#[component]
pub fn CategoryPieChart(data: Vec<PiePoint>, #[props(default)] leaving: bool) -> Element {
    let _lang = crate::i18n::use_language();
    let mut hovered = use_signal(|| None::<usize>);

    if data.is_empty() {
        return rsx! {
            p { class: "chart-empty", {crate::t!("chart-empty")} }
        };
    }

    let slices = layout_donut(&data);
    let tooltip = hovered().and_then(|idx| slices.get(idx)).map(|slice| {
        vec![TooltipEntry {
            name: slice.name.clone(),
            value: slice.value,
            color: slice.color,
        }]
    });
    let view_box = format!("0 0 {SIZE} {SIZE}");

    rsx! {
        div { class: if leaving { "chart pie-chart pie-chart--leaving" } else { "chart pie-chart" },
            svg {
                class: "chart__svg pie-chart__svg",
                view_box: "{view_box}",
                onmouseleave: move |_| hovered.set(None),
                for (idx, slice) in slices.iter().enumerate() {
                    path {
                        key: "{slice.name}-{idx}",
                        class: if hovered() == Some(idx) { "pie-chart__slice pie-chart__slice--active" } else { "pie-chart__slice" },
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        fill_rule: "evenodd",
                        onmouseenter: move |_| hovered.set(Some(idx)),
                    }
                }
            }

            if let Some(entries) = tooltip {
                ChartTooltip { entries }
            }

            ul { class: "chart-legend",
                for (idx, slice) in slices.iter().enumerate() {
                    li { key: "{slice.name}-{idx}", class: "chart-legend__item",
                        span {
                            class: "chart-legend__swatch",
                            style: "background: {slice.color}",
                        }
                        "{slice.name}"
                    }
                }
            }
        }
    }
}
