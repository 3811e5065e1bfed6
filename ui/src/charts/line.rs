use dioxus::prelude::*;

use crate::config::{palette, LineSeriesSpec, LINE_SERIES};
use crate::data::{SeriesKey, TimeSeriesPoint, VisibleSeries};

use super::geometry::{self, Frame, LinearScale};
use super::tooltip::{ChartTooltip, TooltipEntry};

const FRAME: Frame = Frame {
    width: 640.0,
    height: 300.0,
    left: 56.0,
    right: 16.0,
    top: 16.0,
    bottom: 36.0,
};
const Y_TICKS: usize = 4;
/// Show every n-th x label so twenty timestamps don't collide.
const X_LABEL_EVERY: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub key: SeriesKey,
    pub color: &'static str,
    pub path: String,
    pub dots: Vec<(f64, f64)>,
}

/// Everything the line chart draws, in SVG units.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<AxisTick>,
    pub series: Vec<SeriesPath>,
}

/// Lays out the visible series. The y axis only accounts for visible lines;
/// hidden ones are left out entirely.
pub fn layout_lines(data: &[TimeSeriesPoint], visible: VisibleSeries) -> LineLayout {
    let shown: Vec<&LineSeriesSpec> = LINE_SERIES
        .iter()
        .filter(|spec| visible.is_visible(spec.key))
        .collect();

    let max = data
        .iter()
        .flat_map(|point| shown.iter().map(move |spec| point.value(spec.key)))
        .max()
        .unwrap_or(0) as f64;
    let top = geometry::nice_ceiling(max);
    let y = LinearScale::new((0.0, top), (FRAME.plot_bottom(), FRAME.plot_top()));

    let y_ticks = geometry::ticks(max, Y_TICKS)
        .into_iter()
        .map(|value| AxisTick {
            label: crate::core::format::format_number(value),
            position: y.map(value),
        })
        .collect();

    let x_ticks = data
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % X_LABEL_EVERY == 0 || *idx + 1 == data.len())
        .map(|(idx, point)| AxisTick {
            label: point.name.clone(),
            position: geometry::spread(&FRAME, idx, data.len()),
        })
        .collect();

    let series = shown
        .into_iter()
        .map(|spec| {
            let dots: Vec<(f64, f64)> = data
                .iter()
                .enumerate()
                .map(|(idx, point)| {
                    (
                        geometry::spread(&FRAME, idx, data.len()),
                        y.map(point.value(spec.key) as f64),
                    )
                })
                .collect();
            SeriesPath {
                key: spec.key,
                color: spec.color,
                path: geometry::line_path(&dots),
                dots,
            }
        })
        .collect();

    LineLayout {
        y_ticks,
        x_ticks,
        series,
    }
}

pub fn series_label(key: SeriesKey) -> String {
    match key {
        SeriesKey::Uv => crate::t!("series-uv"),
        SeriesKey::Pv => crate::t!("series-pv"),
    }
}

#[component]
pub fn SalesLineChart(
    data: Vec<TimeSeriesPoint>,
    visible: VisibleSeries,
    on_legend_click: EventHandler<SeriesKey>,
) -> Element {
    let _lang = crate::i18n::use_language();
    let mut hovered = use_signal(|| None::<usize>);

    if data.is_empty() {
        return rsx! {
            p { class: "chart-empty", {crate::t!("chart-empty")} }
        };
    }

    let layout = layout_lines(&data, visible);
    let column_width = FRAME.plot_width() / data.len() as f64;

    let tooltip = hovered().and_then(|idx| data.get(idx)).map(|point| {
        let entries: Vec<TooltipEntry> = layout
            .series
            .iter()
            .map(|series| TooltipEntry {
                name: series_label(series.key),
                value: point.value(series.key),
                color: series.color,
            })
            .collect();
        (point.name.clone(), entries)
    });
    let hover_x = hovered().map(|idx| geometry::spread(&FRAME, idx, data.len()));
    let hit_xs: Vec<f64> = (0..data.len())
        .map(|idx| geometry::spread(&FRAME, idx, data.len()) - column_width / 2.0)
        .collect();
    let view_box = FRAME.view_box();
    let (left, right) = (FRAME.plot_left(), FRAME.plot_right());
    let (top, bottom) = (FRAME.plot_top(), FRAME.plot_bottom());
    let plot_height = FRAME.plot_height();
    let tick_x = left - 8.0;
    let label_y = bottom + 20.0;

    rsx! {
        div { class: "chart line-chart",
            svg {
                class: "chart__svg",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                onmouseleave: move |_| hovered.set(None),

                for tick in layout.y_ticks.iter() {
                    g { key: "y-{tick.label}",
                        line {
                            class: "chart__grid",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                        }
                        text {
                            class: "chart__tick",
                            x: "{tick_x}",
                            y: "{tick.position}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{tick.label}"
                        }
                    }
                }
                for tick in layout.x_ticks.iter() {
                    text {
                        key: "x-{tick.label}",
                        class: "chart__tick",
                        x: "{tick.position}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }

                if let Some(x) = hover_x {
                    line {
                        class: "chart__cursor",
                        x1: "{x}",
                        x2: "{x}",
                        y1: "{top}",
                        y2: "{bottom}",
                    }
                }

                for series in layout.series.iter() {
                    g { key: "{series.key:?}", class: "line-chart__series",
                        path {
                            class: "line-chart__path",
                            d: "{series.path}",
                            stroke: "{series.color}",
                        }
                        for (idx, (cx, cy)) in series.dots.iter().copied().enumerate() {
                            circle {
                                key: "{idx}",
                                cx: "{cx}",
                                cy: "{cy}",
                                r: if hovered() == Some(idx) { "6" } else { "3" },
                                fill: "{series.color}",
                                stroke: if hovered() == Some(idx) { palette::BACKGROUND } else { "none" },
                            }
                        }
                    }
                }

                for (idx, x) in hit_xs.into_iter().enumerate() {
                    rect {
                        key: "hit-{idx}",
                        class: "chart__hit",
                        x: "{x}",
                        y: "{top}",
                        width: "{column_width}",
                        height: "{plot_height}",
                        onmouseenter: move |_| hovered.set(Some(idx)),
                    }
                }
            }

            if let Some((label, entries)) = tooltip {
                ChartTooltip { label, entries }
            }

            ul { class: "chart-legend",
                for spec in LINE_SERIES {
                    li { key: "{spec.key:?}",
                        button {
                            r#type: "button",
                            class: if visible.is_visible(spec.key) { "chart-legend__item" } else { "chart-legend__item chart-legend__item--hidden" },
                            aria_pressed: if visible.is_visible(spec.key) { "true" } else { "false" },
                            onclick: move |_| on_legend_click.call(spec.key),
                            span {
                                class: "chart-legend__swatch",
                                style: "background: {spec.color}",
                            }
                            {series_label(spec.key)}
                        }
                    }
                }
            }
        }
    }
}
