//! Exam countdown
//!
//! Driven from the frame loop: elapsed wall-clock time is accumulated and
//! the clock drops one second per whole second elapsed while running.

/// Three hours, the length of a board exam
pub const EXAM_SECONDS: u32 = 3 * 60 * 60;
/// Remaining time below which the clock is shown as urgent
pub const LOW_TIME_SECONDS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct ExamTimer {
    remaining: u32,
    running: bool,
    /// Milliseconds accumulated toward the next whole second
    carry_ms: f64,
    last_ms: Option<f64>,
}

impl Default for ExamTimer {
    fn default() -> Self {
        Self {
            remaining: EXAM_SECONDS,
            running: false,
            carry_ms: 0.0,
            last_ms: None,
        }
    }
}

impl ExamTimer {
    /// Full time, running
    pub fn restart(&mut self) {
        *self = Self {
            running: true,
            ..Self::default()
        };
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.running = true;
        }
    }

    /// Feed the current frame timestamp
    pub fn advance(&mut self, now_ms: f64) {
        if !self.running || self.remaining == 0 {
            self.last_ms = None;
            return;
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return;
        };

        self.carry_ms += (now_ms - last).max(0.0);
        let whole = (self.carry_ms / 1000.0).floor();
        if whole >= 1.0 {
            self.carry_ms -= whole * 1000.0;
            self.remaining = self.remaining.saturating_sub(whole as u32);
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_low(&self) -> bool {
        self.remaining < LOW_TIME_SECONDS
    }

    /// `HH:MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

pub fn format_clock(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_clock(EXAM_SECONDS), "03:00:00");
        assert_eq!(format_clock(3_725), "01:02:05");
        assert_eq!(format_clock(0), "00:00:00");
    }

    #[test]
    fn idle_timer_does_not_move() {
        let mut t = ExamTimer::default();
        t.advance(0.0);
        t.advance(5_000.0);
        assert_eq!(t.remaining(), EXAM_SECONDS);
        assert!(!t.is_running());
    }

    #[test]
    fn counts_whole_seconds_across_frames() {
        let mut t = ExamTimer::default();
        t.restart();
        t.advance(0.0);
        for i in 1..=90 {
            t.advance(i as f64 * 16.0); // 1440 ms total
        }
        assert_eq!(t.remaining(), EXAM_SECONDS - 1);

        t.advance(1440.0 + 2_600.0);
        assert_eq!(t.remaining(), EXAM_SECONDS - 4);
    }

    #[test]
    fn pause_drops_the_gap() {
        let mut t = ExamTimer::default();
        t.restart();
        t.advance(0.0);
        t.toggle();
        t.advance(60_000.0);
        t.toggle();
        t.advance(61_000.0);
        assert_eq!(t.remaining(), EXAM_SECONDS);
        t.advance(62_000.0);
        assert_eq!(t.remaining(), EXAM_SECONDS - 1);
    }

    #[test]
    fn stops_at_zero_and_flags_low_time() {
        let mut t = ExamTimer::default();
        t.restart();
        t.advance(0.0);
        assert!(!t.is_low());
        t.advance((EXAM_SECONDS as f64 - 299.0) * 1000.0);
        assert!(t.is_low());
        t.advance(EXAM_SECONDS as f64 * 2000.0);
        assert_eq!(t.remaining(), 0);
        assert_eq!(t.display(), "00:00:00");
    }
}
