use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use crate::charts::{CategoryPieChart, ProductBarChart, SalesLineChart};
use crate::components::{
    Card, CardSkeleton, CardTitle, DashboardHeader, FilterButton, StatsGrid,
};
use crate::config::STAT_CARDS;
use crate::data::FilterKey;

use super::hook::use_dashboard;

#[component]
fn DashboardSkeleton() -> Element {
    rsx! {
        div { class: "dashboard-container",
            DashboardHeader { title: crate::t!("dashboard-loading-title"), loading: true }
            div { class: "stats-grid",
                for idx in 0..STAT_CARDS.len() {
                    CardSkeleton { key: "{idx}", class: "stat-card" }
                }
            }
            CardSkeleton { class: "line-chart-card" }
            CardSkeleton { class: "bar-chart-card" }
            CardSkeleton { class: "pie-chart-card" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let lang = crate::i18n::use_language();

    let dashboard = use_dashboard();
    let state = dashboard.state();
    let view = state.read().view();

    if view.loading {
        return rsx! { DashboardSkeleton {} };
    }

    let filter = view.active_filter;
    let live_suffix = if filter == FilterKey::All {
        format!(" - {}", crate::t!("chart-line-live"))
    } else {
        String::new()
    };
    let pie_leaving = view.pie_data != view.dataset.pie_data;
    trace!(%filter, pie_leaving, %lang, "dashboard render");

    let show_all = dashboard.clone();
    let legend = dashboard.clone();
    let bars = dashboard.clone();

    rsx! {
        div { class: "dashboard-container",
            DashboardHeader {
                title: crate::t!("dashboard-title"),
                subtitle: crate::t!("dashboard-subtitle"),
            }

            div { class: "filters",
                if filter.is_product() {
                    FilterButton {
                        onclick: move |_| show_all.change_filter(FilterKey::All),
                        {crate::t!("filter-show-all")}
                    }
                }
            }

            StatsGrid { stats: view.dataset.stats }

            Card { class: "line-chart-card",
                CardTitle {
                    {crate::t!("chart-line-title", filter = filter.label())}
                    span { class: "card-title__hint", "{live_suffix}" }
                }
                SalesLineChart {
                    data: view.dataset.time_series.clone(),
                    visible: view.visible_series,
                    on_legend_click: move |key| legend.toggle_series(key),
                }
            }

            Card { class: "bar-chart-card",
                CardTitle { {crate::t!("chart-bar-title")} }
                ProductBarChart {
                    data: view.dataset.bar_data.clone(),
                    on_select: move |key| bars.change_filter(key),
                }
            }

            Card { class: "pie-chart-card",
                CardTitle { {crate::t!("chart-pie-title")} }
                CategoryPieChart { data: view.pie_data.clone(), leaving: pie_leaving }
            }
        }
    }
}
