//! ABOUT - scrolling title over a static version line.

use super::ModeStep;
use crate::config::{ABOUT_TICK_MS, ABOUT_TITLE, ABOUT_VERSION};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::{cycle_window, fit_line};

pub struct About {
    scroll: usize,
}

impl About {
    pub const fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        ABOUT_TICK_MS
    }

    pub async fn enter<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>)
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        ctx.show(0, 1, &fit_line(ABOUT_VERSION)).await;
    }

    /// One character of left scroll per tick, wrapping at the title length.
    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        ctx.show(0, 0, &cycle_window(ABOUT_TITLE, self.scroll)).await;
        self.scroll = (self.scroll + 1) % ABOUT_TITLE.len();
        ModeStep::Continue
    }
}
