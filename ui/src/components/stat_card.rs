use dioxus::prelude::*;
use futures_util::StreamExt;
use time::OffsetDateTime;

use crate::config::{StatCardSpec, StatKind, COUNTER_FRAME_MS, STAT_CARDS};
use crate::core::{format, timing};
use crate::dashboard::SpringCounter;
use crate::data::DashboardStats;

#[component]
pub fn StatsGrid(stats: DashboardStats) -> Element {
    rsx! {
        div { class: "stats-grid stats-grid--enter",
            for spec in STAT_CARDS {
                StatCard { key: "{spec.id()}", spec, stats }
            }
        }
    }
}

#[component]
pub fn StatCard(spec: StatCardSpec, stats: DashboardStats) -> Element {
    let _lang = crate::i18n::use_language();

    rsx! {
        div { class: "card stat-card card--enter",
            div { class: "card-title", {stat_title(spec.kind)} }
            AnimatedCounter { spec, value: spec.value(&stats) as f64 }
        }
    }
}

fn stat_title(kind: StatKind) -> String {
    match kind {
        StatKind::Revenue => crate::t!("stat-revenue"),
        StatKind::Users => crate::t!("stat-users"),
        StatKind::Orders => crate::t!("stat-orders"),
        StatKind::Growth => crate::t!("stat-growth"),
    }
}

/// Card text for the number currently on screen, with its colour override.
fn stat_number(spec: &StatCardSpec, shown: i64) -> (String, String) {
    let text = format!(
        "{}{}{}{}",
        spec.prefix,
        spec.sign(shown),
        format::format_number(shown),
        spec.suffix
    );
    let tone = spec
        .tone(shown)
        .map(|color| format!("color: {color}"))
        .unwrap_or_default();
    (text, tone)
}

/// Stat value that springs toward `value` whenever it changes. Frames only
/// run while the spring is moving; a settled counter waits for the next
/// target.
#[component]
pub fn AnimatedCounter(spec: StatCardSpec, value: ReadOnlySignal<f64>) -> Element {
    let mut shown = use_signal(|| 0_i64);

    let animator = use_coroutine(move |mut targets: UnboundedReceiver<f64>| async move {
        let mut counter = SpringCounter::default();
        while let Some(target) = targets.next().await {
            counter.retarget(target);
            let mut last_frame = OffsetDateTime::now_utc();
            while !counter.is_settled() {
                timing::sleep_ms(COUNTER_FRAME_MS).await;
                while let Ok(Some(next)) = targets.try_next() {
                    counter.retarget(next);
                }
                let now = OffsetDateTime::now_utc();
                let elapsed_ms = (now - last_frame).as_seconds_f64() * 1_000.0;
                last_frame = now;

                let next = counter.advance(elapsed_ms);
                if *shown.peek() != next {
                    shown.set(next);
                }
            }
        }
    });

    use_effect(move || animator.send(value()));

    let (text, tone) = stat_number(&spec, shown());

    rsx! {
        div { class: "stat-number", style: "{tone}",
            span { class: "animated-counter", "{text}" }
        }
    }
}
