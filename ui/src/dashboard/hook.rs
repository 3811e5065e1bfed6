//! Dioxus wiring for the controller.
//!
//! Intents from the view and fired timers all funnel into one coroutine,
//! which is the only writer of the controller signal. Timers are real tasks
//! spawned on the component scope; their handles live in [`TaskTimers`] so a
//! slot can be cancelled before it is re-armed, and everything is cancelled
//! when the dashboard unmounts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::config::DashboardConfig;
use crate::core::{platform, timing};
use crate::data::{DatasetStore, FilterKey, SeriesKey};

use super::controller::{DashboardController, Timer, TimerEvent, TimerHost};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DashboardEvent {
    ChangeFilter(FilterKey),
    ToggleSeries(SeriesKey),
    Timer(TimerEvent),
}

/// [`TimerHost`] backed by Dioxus tasks.
#[derive(Default)]
struct TaskTimers {
    sender: Option<UnboundedSender<DashboardEvent>>,
    pending: HashMap<Timer, Task>,
}

impl TaskTimers {
    fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.cancel();
        }
    }
}

impl TimerHost for TaskTimers {
    fn arm(&mut self, timer: Timer, delay_ms: u64, event: TimerEvent) {
        self.cancel(timer);
        let Some(sender) = self.sender.clone() else {
            return;
        };
        let task = platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(DashboardEvent::Timer(event));
        });
        self.pending.insert(timer, task);
    }

    fn cancel(&mut self, timer: Timer) {
        if let Some(task) = self.pending.remove(&timer) {
            task.cancel();
        }
    }
}

/// Handle returned by [`use_dashboard`].
#[derive(Clone)]
pub struct DashboardHandle {
    state: Signal<DashboardController<'static>>,
    events: Coroutine<DashboardEvent>,
}

impl DashboardHandle {
    pub fn state(&self) -> Signal<DashboardController<'static>> {
        self.state
    }

    pub fn change_filter(&self, key: FilterKey) {
        self.events.send(DashboardEvent::ChangeFilter(key));
    }

    pub fn toggle_series(&self, key: SeriesKey) {
        self.events.send(DashboardEvent::ToggleSeries(key));
    }
}

/// Mounts a dashboard controller on the current component.
pub fn use_dashboard() -> DashboardHandle {
    let mut state = use_signal(|| {
        DashboardController::new(DatasetStore::shared(), DashboardConfig::default())
    });
    let timers: Rc<RefCell<TaskTimers>> = use_hook(|| Rc::new(RefCell::new(TaskTimers::default())));

    let events = {
        let timers = timers.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
            let timers = timers.clone();
            let mut state = state;
            async move {
                state.with_mut(|ctl| ctl.initialize(&mut *timers.borrow_mut()));

                while let Some(event) = rx.next().await {
                    let mut host = timers.borrow_mut();
                    match event {
                        DashboardEvent::ChangeFilter(key) => {
                            state.with_mut(|ctl| ctl.change_filter(key, &mut *host));
                        }
                        DashboardEvent::ToggleSeries(key) => {
                            state.with_mut(|ctl| ctl.toggle_series(key));
                        }
                        DashboardEvent::Timer(fired) => {
                            state.with_mut(|ctl| ctl.handle_timer(fired, &mut *host));
                        }
                    }
                }
            }
        })
    };

    if timers.borrow().sender.is_none() {
        timers.borrow_mut().sender = Some(events.tx());
    }

    {
        let timers = timers.clone();
        use_drop(move || {
            let mut host = timers.borrow_mut();
            match state.try_write() {
                Ok(mut ctl) => ctl.teardown(&mut *host),
                Err(_) => host.cancel_all(),
            }
            debug!("dashboard unmounted");
        });
    }

    DashboardHandle { state, events }
}
