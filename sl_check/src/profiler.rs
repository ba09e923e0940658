//! Host-side timing events.
//!
//! Profiling is off by default. When enabled, a [`RecordEvent`] measures the
//! wall time between its creation and [`RecordEvent::end`] (or drop) and
//! appends it to the process-wide [`HostEventRecorder`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProfilerState {
    Disabled = 0,
    Cpu = 1,
}

static STATE: AtomicU8 = AtomicU8::new(ProfilerState::Disabled as u8);

pub fn set_state(state: ProfilerState) {
    STATE.store(state as u8, Ordering::Relaxed);
}

pub fn state() -> ProfilerState {
    match STATE.load(Ordering::Relaxed) {
        1 => ProfilerState::Cpu,
        _ => ProfilerState::Disabled,
    }
}

pub fn is_enabled() -> bool {
    state() != ProfilerState::Disabled
}

/// A finished timing event.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    pub name: String,
    pub millis: f64,
}

/// Collects finished events for the whole process.
#[derive(Debug, Default)]
pub struct HostEventRecorder {
    events: Mutex<Vec<HostEvent>>,
}

impl HostEventRecorder {
    pub fn instance() -> &'static HostEventRecorder {
        static RECORDER: OnceLock<HostEventRecorder> = OnceLock::new();
        RECORDER.get_or_init(HostEventRecorder::default)
    }

    pub fn record(&self, name: &str, millis: f64) {
        debug!("event {name}: {millis:.3} ms");
        self.lock().push(HostEvent {
            name: name.to_string(),
            millis,
        });
    }

    /// Drain every recorded event.
    pub fn take(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HostEvent>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Scoped timer. Inert when profiling is disabled at creation.
#[derive(Debug)]
pub struct RecordEvent {
    name: String,
    start: Option<Instant>,
}

impl RecordEvent {
    pub fn new(name: impl Into<String>) -> Self {
        let start = is_enabled().then(Instant::now);
        RecordEvent {
            name: name.into(),
            start,
        }
    }

    /// Stop the timer and record the event. Later calls do nothing.
    pub fn end(&mut self) {
        if let Some(start) = self.start.take() {
            let millis = start.elapsed().as_secs_f64() * 1e3;
            HostEventRecorder::instance().record(&self.name, millis);
        }
    }
}

impl Drop for RecordEvent {
    fn drop(&mut self) {
        self.end();
    }
}
