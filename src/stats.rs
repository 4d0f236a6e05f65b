use galaxy_core::FrameStats;
use instant::Instant;

/// Rolling frame counters summarized once per window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub fps: f32,
    pub avg_drawn: usize,
    pub avg_culled: usize,
}

pub struct StatsWindow {
    started: Instant,
    interval_sec: f32,
    frames: u32,
    drawn: usize,
    culled: usize,
}

impl StatsWindow {
    pub fn new(now: Instant, interval_sec: f32) -> Self {
        Self {
            started: now,
            interval_sec,
            frames: 0,
            drawn: 0,
            culled: 0,
        }
    }

    /// Count one frame; returns a report and restarts the window once
    /// `interval_sec` has elapsed.
    pub fn record(&mut self, stats: FrameStats, now: Instant) -> Option<FrameReport> {
        self.frames += 1;
        self.drawn += stats.drawn;
        self.culled += stats.culled;

        let elapsed = now.duration_since(self.started).as_secs_f32();
        if elapsed < self.interval_sec {
            return None;
        }
        let n = self.frames as usize;
        let report = FrameReport {
            fps: self.frames as f32 / elapsed,
            avg_drawn: self.drawn / n,
            avg_culled: self.culled / n,
        };
        *self = Self::new(now, self.interval_sec);
        Some(report)
    }
}
