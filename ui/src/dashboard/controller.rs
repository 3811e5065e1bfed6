//! Dashboard state controller.
//!
//! Owns everything the dashboard shows and every timer that changes it. Two
//! axes move independently: the loading phase (`Loading` → `Ready`, exactly
//! once) and the active filter. Timers are not spawned here directly; the
//! controller arms and cancels them through a [`TimerHost`], which lets the
//! Dioxus view back them with real tasks and lets tests drive a virtual
//! clock.
//!
//! Each timer slot holds at most one pending timer. Arming a slot replaces
//! whatever was pending in it.

use dioxus::logger::tracing::{debug, info, trace};

use crate::config::DashboardConfig;
use crate::data::{
    generate_next_point, Dataset, DatasetStore, FilterKey, PiePoint, SeriesKey, TimeSeriesPoint,
    VisibleSeries,
};

/// The timer slots the controller uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    InitialLoad,
    Refresh,
    PieTransition,
}

/// Delivered back to the controller when an armed timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    LoadingElapsed,
    RefreshTick,
    PieTransition { generation: u64 },
}

/// Schedules one-shot timers on behalf of the controller.
pub trait TimerHost {
    /// Schedules `event` after `delay_ms`, replacing anything pending in `timer`.
    fn arm(&mut self, timer: Timer, delay_ms: u64, event: TimerEvent);
    /// Drops whatever is pending in `timer`. No-op when nothing is.
    fn cancel(&mut self, timer: Timer);
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub loading: bool,
    pub dataset: Dataset,
    pub pie_data: Vec<PiePoint>,
    pub active_filter: FilterKey,
    pub visible_series: VisibleSeries,
}

pub struct DashboardController<'s> {
    store: &'s DatasetStore,
    config: DashboardConfig,
    loading: bool,
    dataset: Dataset,
    pie_data: Vec<PiePoint>,
    active_filter: FilterKey,
    visible_series: VisibleSeries,
    /// Bumped on every filter change; a pie update only lands if it carries
    /// the latest value.
    pie_generation: u64,
    refresh_armed: bool,
}

impl<'s> DashboardController<'s> {
    /// Builds a controller in its initial (loading, "All") state. No timers
    /// are armed until [`initialize`](Self::initialize).
    pub fn new(store: &'s DatasetStore, config: DashboardConfig) -> Self {
        let all = store.get(FilterKey::All);
        Self {
            store,
            config,
            loading: true,
            dataset: all.clone(),
            pie_data: all.pie_data.clone(),
            active_filter: FilterKey::All,
            visible_series: VisibleSeries::default(),
            pie_generation: 0,
            refresh_armed: false,
        }
    }

    /// Resets to the initial state and schedules the end of loading.
    pub fn initialize(&mut self, host: &mut impl TimerHost) {
        let all = self.store.get(FilterKey::All);
        self.loading = true;
        self.dataset = all.clone();
        self.pie_data = all.pie_data.clone();
        self.active_filter = FilterKey::All;
        self.visible_series = VisibleSeries::default();
        self.pie_generation = 0;

        host.cancel(Timer::PieTransition);
        self.sync_refresh(host);
        host.arm(
            Timer::InitialLoad,
            self.config.initial_load_ms,
            TimerEvent::LoadingElapsed,
        );
        debug!(delay_ms = self.config.initial_load_ms, "dashboard initialized");
    }

    pub fn on_loading_timeout(&mut self, host: &mut impl TimerHost) {
        if !self.loading {
            trace!("loading already finished; ignoring timeout");
            return;
        }
        self.loading = false;
        info!(filter = %self.active_filter, "dashboard ready");
        self.sync_refresh(host);
    }

    /// Switches the active filter.
    ///
    /// Stats, bars and the line series change immediately. The pie data
    /// follows after the pie transition delay so the outgoing slices can
    /// animate away first; any pie update still pending from an earlier
    /// change is cancelled.
    pub fn change_filter(&mut self, key: FilterKey, host: &mut impl TimerHost) {
        self.active_filter = key;
        self.dataset = self.store.get(key).clone();

        self.pie_generation = self.pie_generation.wrapping_add(1);
        host.cancel(Timer::PieTransition);
        host.arm(
            Timer::PieTransition,
            self.config.pie_transition_ms,
            TimerEvent::PieTransition {
                generation: self.pie_generation,
            },
        );

        self.sync_refresh(host);
        debug!(filter = %key, generation = self.pie_generation, "filter changed");
    }

    pub fn toggle_series(&mut self, key: SeriesKey) {
        self.visible_series.toggle(key);
        debug!(series = key.data_key(), visible = self.visible_series.is_visible(key), "series toggled");
    }

    /// Applies a pie update scheduled by [`change_filter`](Self::change_filter).
    pub fn on_pie_transition(&mut self, generation: u64) {
        if generation != self.pie_generation {
            debug!(
                generation,
                latest = self.pie_generation,
                "dropping superseded pie update"
            );
            return;
        }
        self.pie_data = self.store.get(self.active_filter).pie_data.clone();
    }

    /// Slides the live window by one freshly generated point.
    pub fn on_refresh_tick(&mut self, host: &mut impl TimerHost) {
        self.refresh_with(generate_next_point(), host);
    }

    /// Same as [`on_refresh_tick`](Self::on_refresh_tick) with a given point.
    pub fn refresh_with(&mut self, point: TimeSeriesPoint, host: &mut impl TimerHost) {
        self.refresh_armed = false;
        if !self.refresh_enabled() {
            trace!(filter = %self.active_filter, "refresh tick outside live mode; ignored");
            return;
        }
        trace!(label = %point.name, "live point appended");
        self.dataset.slide_window(point);
        self.sync_refresh(host);
    }

    pub fn handle_timer(&mut self, event: TimerEvent, host: &mut impl TimerHost) {
        match event {
            TimerEvent::LoadingElapsed => self.on_loading_timeout(host),
            TimerEvent::RefreshTick => self.on_refresh_tick(host),
            TimerEvent::PieTransition { generation } => self.on_pie_transition(generation),
        }
    }

    /// Cancels every timer the controller may have armed.
    pub fn teardown(&mut self, host: &mut impl TimerHost) {
        host.cancel(Timer::InitialLoad);
        host.cancel(Timer::Refresh);
        host.cancel(Timer::PieTransition);
        self.refresh_armed = false;
        debug!("dashboard torn down");
    }

    /// Live refresh runs only once loaded and while showing "All".
    pub fn refresh_enabled(&self) -> bool {
        !self.loading && self.active_filter == FilterKey::All
    }

    fn sync_refresh(&mut self, host: &mut impl TimerHost) {
        match (self.refresh_enabled(), self.refresh_armed) {
            (true, false) => {
                host.arm(
                    Timer::Refresh,
                    self.config.data_update_ms,
                    TimerEvent::RefreshTick,
                );
                self.refresh_armed = true;
            }
            (false, true) => {
                host.cancel(Timer::Refresh);
                self.refresh_armed = false;
            }
            _ => {}
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn pie_data(&self) -> &[PiePoint] {
        &self.pie_data
    }

    pub fn active_filter(&self) -> FilterKey {
        self.active_filter
    }

    pub fn visible_series(&self) -> VisibleSeries {
        self.visible_series
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            loading: self.loading,
            dataset: self.dataset.clone(),
            pie_data: self.pie_data.clone(),
            active_filter: self.active_filter,
            visible_series: self.visible_series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Records the last arm per slot without ever firing.
    #[derive(Default)]
    struct RecordingHost {
        armed: HashMap<Timer, (u64, TimerEvent)>,
        arms: Vec<Timer>,
        cancels: Vec<Timer>,
    }

    impl TimerHost for RecordingHost {
        fn arm(&mut self, timer: Timer, delay_ms: u64, event: TimerEvent) {
            self.armed.insert(timer, (delay_ms, event));
            self.arms.push(timer);
        }

        fn cancel(&mut self, timer: Timer) {
            self.armed.remove(&timer);
            self.cancels.push(timer);
        }
    }

    fn point(name: &str) -> TimeSeriesPoint {
        TimeSeriesPoint {
            name: name.into(),
            uv: 1,
            pv: 2,
        }
    }

    fn ready(host: &mut RecordingHost) -> DashboardController<'static> {
        let mut controller = DashboardController::new(DatasetStore::shared(), DashboardConfig::default());
        controller.initialize(host);
        controller.on_loading_timeout(host);
        controller
    }

    #[test]
    fn initialize_starts_loading_on_all() {
        let mut host = RecordingHost::default();
        let mut controller = DashboardController::new(DatasetStore::shared(), DashboardConfig::default());
        controller.initialize(&mut host);

        assert!(controller.loading());
        assert_eq!(controller.active_filter(), FilterKey::All);
        assert_eq!(controller.visible_series(), VisibleSeries { uv: true, pv: true });
        assert_eq!(controller.dataset(), DatasetStore::shared().get(FilterKey::All));
        assert_eq!(
            host.armed.get(&Timer::InitialLoad),
            Some(&(2_000, TimerEvent::LoadingElapsed))
        );
        assert!(!host.armed.contains_key(&Timer::Refresh));
    }

    #[test]
    fn loading_timeout_arms_refresh_once() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        assert!(!controller.loading());
        assert_eq!(
            host.armed.get(&Timer::Refresh),
            Some(&(2_500, TimerEvent::RefreshTick))
        );

        controller.on_loading_timeout(&mut host);
        let refresh_arms = host.arms.iter().filter(|t| **t == Timer::Refresh).count();
        assert_eq!(refresh_arms, 1);
    }

    #[test]
    fn change_filter_applies_dataset_before_pie() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        let store = DatasetStore::shared();

        controller.change_filter(FilterKey::ProductA, &mut host);

        assert_eq!(controller.active_filter(), FilterKey::ProductA);
        assert_eq!(controller.dataset().stats, store.get(FilterKey::ProductA).stats);
        assert_eq!(controller.dataset().bar_data, store.get(FilterKey::ProductA).bar_data);
        assert_eq!(controller.pie_data(), store.get(FilterKey::All).pie_data.as_slice());

        let (delay, event) = host.armed[&Timer::PieTransition];
        assert_eq!(delay, 300);
        controller.handle_timer(event, &mut host);
        assert_eq!(controller.pie_data(), store.get(FilterKey::ProductA).pie_data.as_slice());
    }

    #[test]
    fn leaving_all_cancels_refresh() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        controller.change_filter(FilterKey::ProductB, &mut host);
        assert!(!host.armed.contains_key(&Timer::Refresh));
        assert!(!controller.refresh_enabled());
    }

    #[test]
    fn superseded_pie_update_is_dropped() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);

        controller.change_filter(FilterKey::ProductB, &mut host);
        let (_, stale) = host.armed[&Timer::PieTransition];
        controller.change_filter(FilterKey::ProductC, &mut host);
        let (_, fresh) = host.armed[&Timer::PieTransition];

        controller.handle_timer(stale, &mut host);
        assert_eq!(
            controller.pie_data(),
            DatasetStore::shared().get(FilterKey::All).pie_data.as_slice()
        );

        controller.handle_timer(fresh, &mut host);
        assert_eq!(
            controller.pie_data(),
            DatasetStore::shared().get(FilterKey::ProductC).pie_data.as_slice()
        );
    }

    #[test]
    fn refresh_slides_window() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        let before = controller.dataset().time_series.clone();

        controller.refresh_with(point("live"), &mut host);

        let after = &controller.dataset().time_series;
        assert_eq!(after.len(), before.len());
        assert_eq!(after[..after.len() - 1], before[1..]);
        assert_eq!(after.last().map(|p| p.name.as_str()), Some("live"));
        assert!(host.armed.contains_key(&Timer::Refresh));
    }

    #[test]
    fn stale_refresh_tick_is_ignored() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        controller.change_filter(FilterKey::ProductD, &mut host);
        let before = controller.dataset().clone();

        controller.refresh_with(point("late"), &mut host);

        assert_eq!(controller.dataset(), &before);
        assert!(!host.armed.contains_key(&Timer::Refresh));
    }

    #[test]
    fn refresh_does_not_run_while_loading() {
        let mut host = RecordingHost::default();
        let mut controller = DashboardController::new(DatasetStore::shared(), DashboardConfig::default());
        controller.initialize(&mut host);
        let before = controller.dataset().clone();
        controller.refresh_with(point("early"), &mut host);
        assert_eq!(controller.dataset(), &before);
    }

    #[test]
    fn toggle_series_touches_only_one_flag() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        let before = controller.dataset().clone();

        controller.toggle_series(SeriesKey::Uv);

        assert_eq!(controller.visible_series(), VisibleSeries { uv: false, pv: true });
        assert_eq!(controller.dataset(), &before);
    }

    #[test]
    fn teardown_cancels_every_slot() {
        let mut host = RecordingHost::default();
        let mut controller = ready(&mut host);
        controller.change_filter(FilterKey::ProductE, &mut host);
        controller.change_filter(FilterKey::All, &mut host);

        controller.teardown(&mut host);

        assert!(host.armed.is_empty());
        for timer in [Timer::InitialLoad, Timer::Refresh, Timer::PieTransition] {
            assert!(host.cancels.contains(&timer));
        }
    }

    #[test]
    fn view_mirrors_accessors() {
        let mut host = RecordingHost::default();
        let controller = ready(&mut host);
        let view = controller.view();
        assert_eq!(view.loading, controller.loading());
        assert_eq!(&view.dataset, controller.dataset());
        assert_eq!(view.pie_data.as_slice(), controller.pie_data());
        assert_eq!(view.active_filter, controller.active_filter());
        assert_eq!(view.visible_series, controller.visible_series());
    }
}
