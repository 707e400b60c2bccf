use std::time::{Duration, Instant};

/// Minimal game clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as `tick`, with an explicit current time
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules frames at a target rate.
///
/// Before each frame the loop sleeps until `next_deadline`. A pacer that falls
/// more than one frame behind restarts from the current time instead of
/// bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_time: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(max_fps: u32) -> Self {
        Self::starting_at(max_fps, Instant::now())
    }

    pub fn starting_at(max_fps: u32, now: Instant) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / max_fps.max(1) as f64),
            next_frame: now,
        }
    }

    /// Target frame duration in seconds
    pub fn target_frame_time(&self) -> f32 {
        self.frame_time.as_secs_f32()
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Block the thread until the next frame is due
    pub fn sleep_until_due(&self) {
        let now = Instant::now();
        if !self.is_due(now) {
            std::thread::sleep(self.next_frame - now);
        }
    }

    /// Record that a frame started at `now`
    pub fn mark_frame(&mut self, now: Instant) {
        let next = self.next_frame + self.frame_time;
        self.next_frame = if next + self.frame_time < now {
            now + self.frame_time
        } else {
            next.max(now)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn test_clock_tick_at_is_exact() {
        let start = Instant::now();
        let mut clock = Clock { last_tick: start };
        let delta = clock.tick_at(start + Duration::from_millis(16));
        assert!((delta - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_pacer_target_frame_time() {
        let pacer = FramePacer::new(60);
        assert!((pacer.target_frame_time() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_pacer_is_due_immediately_then_waits() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(50, start);
        assert!(pacer.is_due(start));

        pacer.mark_frame(start);
        assert!(!pacer.is_due(start + Duration::from_millis(10)));
        assert!(pacer.is_due(start + Duration::from_millis(20)));
        assert_eq!(pacer.next_deadline(), start + Duration::from_millis(20));
    }

    #[test]
    fn test_pacer_keeps_cadence_when_slightly_late() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(50, start);
        pacer.mark_frame(start);

        pacer.mark_frame(start + Duration::from_millis(22));
        assert_eq!(pacer.next_deadline(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_pacer_resyncs_after_stall() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(50, start);
        pacer.mark_frame(start);

        let late = start + Duration::from_millis(500);
        pacer.mark_frame(late);
        assert_eq!(pacer.next_deadline(), late + Duration::from_millis(20));
    }
}
