//! CYBER HUD - a free-memory "signal" bar, then back to the menu.

use super::ModeStep;
use crate::config::{HUD_FRAME_COUNT, HUD_FRAME_MS};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::{fit_line, memory_bar};
use heapless::String;

pub struct CyberHud {
    frames: u32,
}

impl CyberHud {
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        HUD_FRAME_MS
    }

    /// Render one frame; after [`HUD_FRAME_COUNT`] frames the mode ends.
    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        if self.frames >= HUD_FRAME_COUNT {
            return ModeStep::Exit;
        }

        let mut signal: String<32> = String::new();
        let _ = signal.push_str("SIG:");
        let _ = signal.push_str(memory_bar(ctx.memory.free_bytes()).as_str());

        ctx.show(0, 0, &fit_line(&signal)).await;
        ctx.show(0, 1, "CPU: ACTIVE").await;

        self.frames += 1;
        ModeStep::Continue
    }
}
