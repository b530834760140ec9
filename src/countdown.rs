//! Scarcity countdown shown on the learning-path page.
//!
//! The anchor is kept by the browser (session cookies) and the remaining time
//! is always recomputed from it, never counted down in place.

use crate::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub started_at_ms: i64,
    pub duration_secs: u64,
}

impl Countdown {
    pub fn start(now_ms: i64) -> Self {
        Self {
            started_at_ms: now_ms,
            duration_secs: names::COUNTDOWN_DURATION_SECS,
        }
    }

    /// Restores an anchor from its stored parts; either part missing or
    /// unreadable starts a new one. An anchor before the epoch or after
    /// `now_ms`, or a duration outside `1..=COUNTDOWN_DURATION_SECS`, counts as
    /// unreadable.
    pub fn from_stored(started_at: Option<&str>, duration: Option<&str>, now_ms: i64) -> (Self, bool) {
        let stored = started_at
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|started| (0..=now_ms).contains(started))
            .zip(
                duration
                    .and_then(|d| d.parse::<u64>().ok())
                    .filter(|d| (1..=names::COUNTDOWN_DURATION_SECS).contains(d)),
            );

        match stored {
            Some((started_at_ms, duration_secs)) => (
                Self {
                    started_at_ms,
                    duration_secs,
                },
                false,
            ),
            None => (Self::start(now_ms), true),
        }
    }

    /// Whole seconds left at `now_ms`, never negative.
    pub fn remaining(&self, now_ms: i64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.started_at_ms).max(0) / 1000;
        self.duration_secs.saturating_sub(elapsed as u64)
    }

    /// Remaining time at `now_ms`, restarting the countdown once it runs out.
    /// The flag is set when the anchor changed and has to be stored again.
    pub fn tick(self, now_ms: i64) -> (Self, u64, bool) {
        match self.remaining(now_ms) {
            0 => {
                let restarted = Self {
                    started_at_ms: now_ms,
                    ..self
                };
                (restarted, restarted.duration_secs, true)
            }
            left => (self, left, false),
        }
    }
}

/// `m:ss`
pub fn format_remaining(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
