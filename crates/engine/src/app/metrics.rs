use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::warn;

static POISON_REPORTED: AtomicBool = AtomicBool::new(false);

fn recover<T>(operation: &'static str, poisoned: PoisonError<T>) -> T {
    if !POISON_REPORTED.swap(true, Ordering::Relaxed) {
        warn!(operation, "metrics_lock_poisoned_recovered");
    }
    poisoned.into_inner()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub worst_frame_ms: f32,
    /// Fraction of frames in the interval that had a dialogue on screen.
    pub dialogue_share: f32,
}

/// Latest published loop metrics, readable from any thread.
#[derive(Clone, Debug, Default)]
pub struct MetricsHandle {
    latest: Arc<RwLock<LoopMetricsSnapshot>>,
}

impl MetricsHandle {
    pub fn snapshot(&self) -> LoopMetricsSnapshot {
        *self
            .latest
            .read()
            .unwrap_or_else(|poisoned| recover("read", poisoned))
    }

    pub(crate) fn publish(&self, snapshot: LoopMetricsSnapshot) {
        let mut guard = self
            .latest
            .write()
            .unwrap_or_else(|poisoned| recover("write", poisoned));
        *guard = snapshot;
    }
}

#[derive(Debug, Default)]
struct FrameWindow {
    frames: u32,
    dialogue_frames: u32,
    total: Duration,
    worst: Duration,
}

impl FrameWindow {
    fn summarize(&self, elapsed: Duration) -> LoopMetricsSnapshot {
        if self.frames == 0 {
            return LoopMetricsSnapshot::default();
        }
        let frames = self.frames as f32;
        LoopMetricsSnapshot {
            fps: frames / elapsed.as_secs_f32().max(f32::EPSILON),
            frame_time_ms: self.total.as_secs_f32() * 1000.0 / frames,
            worst_frame_ms: self.worst.as_secs_f32() * 1000.0,
            dialogue_share: self.dialogue_frames as f32 / frames,
        }
    }
}

/// Collects frame times and emits one snapshot per `interval`.
#[derive(Debug)]
pub(crate) struct MetricsAccumulator {
    interval: Duration,
    window_start: Instant,
    window: FrameWindow,
}

impl MetricsAccumulator {
    pub(crate) fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    fn starting_at(interval: Duration, window_start: Instant) -> Self {
        Self {
            interval,
            window_start,
            window: FrameWindow::default(),
        }
    }

    pub(crate) fn record_frame(&mut self, frame_dt: Duration, in_dialogue: bool) {
        let window = &mut self.window;
        window.frames = window.frames.saturating_add(1);
        window.total = window.total.saturating_add(frame_dt);
        window.worst = window.worst.max(frame_dt);
        if in_dialogue {
            window.dialogue_frames = window.dialogue_frames.saturating_add(1);
        }
    }

    pub(crate) fn maybe_snapshot(&mut self, now: Instant) -> Option<LoopMetricsSnapshot> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }
        let window = mem::take(&mut self.window);
        self.window_start = now;
        Some(window.summarize(elapsed))
    }
}
