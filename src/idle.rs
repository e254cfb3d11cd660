//! Activity tracking and the idle marquee.
//!
//! The menu loop records activity on every navigation edge, button press
//! and mode entry/exit. Once nothing has happened for
//! [`IDLE_TIMEOUT_MS`](crate::config::IDLE_TIMEOUT_MS) the menu is replaced
//! by a phrase that shifts one cell to the right per frame on row 0.

use crate::config::{IDLE_PHRASE, IDLE_TIMEOUT_MS};
use crate::ui::text::{cycle_window, Line};

/// Whether the user is around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityState {
    /// Recent input - menu is shown.
    Active,
    /// No input for the idle timeout - marquee is shown.
    Idle,
}

/// Decide the activity state from the time since the last activity.
pub fn state_after(elapsed_ms: u64, timeout_ms: u64) -> ActivityState {
    if elapsed_ms >= timeout_ms {
        ActivityState::Idle
    } else {
        ActivityState::Active
    }
}

/// Tracks the last activity and owns the marquee scroll position.
pub struct IdleTracker {
    state: ActivityState,
    last_activity_ms: u64,
    timeout_ms: u64,
    phrase: &'static str,
    scroll_offset: usize,
}

impl IdleTracker {
    /// Start active, as if activity happened at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self::with_timeout(now_ms, IDLE_TIMEOUT_MS, IDLE_PHRASE)
    }

    /// Same as [`IdleTracker::new`] with a custom timeout and phrase.
    pub fn with_timeout(now_ms: u64, timeout_ms: u64, phrase: &'static str) -> Self {
        Self {
            state: ActivityState::Active,
            last_activity_ms: now_ms,
            timeout_ms,
            phrase,
            scroll_offset: 0,
        }
    }

    /// Record activity (axis edge, button press, mode entry or exit).
    pub fn record_activity(&mut self, now_ms: u64) {
        if self.state != ActivityState::Active {
            info!("idle: woken after {} ms", self.elapsed_since_activity(now_ms));
            self.state = ActivityState::Active;
        }
        self.last_activity_ms = now_ms;
    }

    /// Re-evaluate the state at `now_ms` and return it.
    pub fn tick(&mut self, now_ms: u64) -> ActivityState {
        let new_state = state_after(self.elapsed_since_activity(now_ms), self.timeout_ms);
        if new_state != self.state {
            info!("idle: {} -> {}", self.state, new_state);
            self.state = new_state;
        }
        self.state
    }

    pub fn state(&self) -> ActivityState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == ActivityState::Idle
    }

    /// Current marquee window, then step the scroll one character.
    ///
    /// The offset steps backwards through the phrase, wrapping, so the
    /// frames repeat every `phrase.len()` calls.
    pub fn next_marquee_frame(&mut self) -> Line {
        let frame = cycle_window(self.phrase, self.scroll_offset);
        let len = self.phrase.chars().count();
        if len > 0 {
            self.scroll_offset = (self.scroll_offset + len - 1) % len;
        }
        frame
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn elapsed_since_activity(&self, now_ms: u64) -> u64 {
        now_ms.wrapping_sub(self.last_activity_ms)
    }
}
