//! Payment countdown
//!
//! Reaching zero has no side effect; the screen only shows `00:00`.

use chrono::{DateTime, Local};

pub const DEFAULT_SECONDS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// One second elapsed; stays at zero once there
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn tick_n(&mut self, seconds: u32) {
        self.remaining = self.remaining.saturating_sub(seconds);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}

/// Countdown fed by clock readings instead of a timer thread
///
/// Only whole elapsed seconds are consumed; the remainder carries over to the
/// next sync.
#[derive(Debug, Clone, Copy)]
pub struct ClockedCountdown {
    countdown: Countdown,
    last_tick: DateTime<Local>,
}

impl ClockedCountdown {
    pub fn start(seconds: u32, now: DateTime<Local>) -> Self {
        Self {
            countdown: Countdown::new(seconds),
            last_tick: now,
        }
    }

    pub fn sync(&mut self, now: DateTime<Local>) {
        let elapsed = (now - self.last_tick).num_seconds();
        if elapsed <= 0 {
            return;
        }
        let ticks = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.countdown.tick_n(ticks);
        self.last_tick = self.last_tick + chrono::Duration::seconds(elapsed);
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_reaches_zero_after_300_ticks() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.display(), "05:00");
        for _ in 0..299 {
            countdown.tick();
        }
        assert_eq!(countdown.display(), "00:01");
        assert!(!countdown.is_expired());

        countdown.tick();
        assert_eq!(countdown.display(), "00:00");
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_floors_at_zero() {
        let mut countdown = Countdown::new(2);
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 0);
        countdown.tick_n(u32::MAX);
        assert_eq!(countdown.display(), "00:00");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Countdown::new(61).display(), "01:01");
        assert_eq!(Countdown::new(9).display(), "00:09");
    }

    #[test]
    fn test_clocked_countdown_carries_fractions() {
        let start = Local.with_ymd_and_hms(2025, 10, 24, 18, 0, 0).unwrap();
        let mut clocked = ClockedCountdown::start(300, start);

        clocked.sync(start + Duration::milliseconds(900));
        assert_eq!(clocked.countdown().remaining(), 300);

        clocked.sync(start + Duration::milliseconds(1_100));
        assert_eq!(clocked.countdown().remaining(), 299);

        clocked.sync(start + Duration::milliseconds(2_000));
        assert_eq!(clocked.countdown().remaining(), 298);

        clocked.sync(start + Duration::minutes(10));
        assert_eq!(clocked.countdown().display(), "00:00");
    }
}
