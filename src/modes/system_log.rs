//! SYSTEM LOG - cycles through the most recent log entries.

use super::ModeStep;
use crate::config::{
    SYSTEM_LOG_EMPTY_POLL_MS, SYSTEM_LOG_HOLD_POLLS, SYSTEM_LOG_POLL_MS, SYSTEM_LOG_SHOWN,
};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::fit_line;

pub struct SystemLog {
    /// Which of the shown entries is on screen (0 = older).
    slot: usize,
    /// Polls the current entry has been on screen.
    held: u32,
    empty: bool,
}

impl SystemLog {
    pub const fn new() -> Self {
        Self {
            slot: 0,
            held: 0,
            empty: false,
        }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        if self.empty {
            SYSTEM_LOG_EMPTY_POLL_MS
        } else {
            SYSTEM_LOG_POLL_MS
        }
    }

    pub async fn enter<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>)
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        ctx.show(0, 0, "> SYSTEM LOG").await;
    }

    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        if ctx.log.is_empty() {
            self.empty = true;
            ctx.show(0, 1, &fit_line("No logs yet")).await;
            return ModeStep::Continue;
        }
        self.empty = false;

        let shown = ctx.log.len().min(SYSTEM_LOG_SHOWN);
        if self.held == 0 {
            let line = ctx.log.recent(SYSTEM_LOG_SHOWN).nth(self.slot).map(fit_line);
            if let Some(line) = line {
                ctx.show(0, 1, &line).await;
            }
        }

        self.held += 1;
        if self.held >= SYSTEM_LOG_HOLD_POLLS {
            self.held = 0;
            self.slot = (self.slot + 1) % shown;
        }
        ModeStep::Continue
    }
}
