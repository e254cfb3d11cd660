//! Top-level menu state machine.
//!
//! Each [`MenuController::step`] samples the joystick once, then either
//! moves the selection, runs the selected mode to completion, or advances
//! the idle marquee. The loop does not run while a mode is active; the mode
//! owns the display and joystick until it returns.

use super::input_logic::{select_next, select_prev};
use super::text::Line;
use super::{InputEvent, MenuEntry};
use crate::config::{IDLE_FRAME_MS, IDLE_LABEL, MENU_POLL_MS};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::idle::{ActivityState, IdleTracker};
use crate::modes::run_mode;

pub struct MenuController<D, N, J, C, M> {
    ctx: Context<D, N, J, C, M>,
    idle: IdleTracker,
    selected: usize,
}

impl<D, N, J, C, M> MenuController<D, N, J, C, M>
where
    D: TextDisplay,
    N: Network,
    J: Joystick,
    C: Clock,
    M: MemoryProbe,
{
    pub fn new(ctx: Context<D, N, J, C, M>) -> Self {
        let now = ctx.clock.now_ms();
        Self {
            ctx,
            idle: IdleTracker::new(now),
            selected: 0,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected]
    }

    pub fn activity_state(&self) -> ActivityState {
        self.idle.state()
    }

    pub fn context(&self) -> &Context<D, N, J, C, M> {
        &self.ctx
    }

    /// Draw the menu and loop forever.
    pub async fn run(&mut self) -> ! {
        info!("menu: started");
        self.draw_menu().await;
        loop {
            self.step().await;
        }
    }

    /// Selected entry on row 0, the one after it (if any) on row 1.
    pub async fn draw_menu(&mut self) {
        self.ctx.clear().await;

        let current = self.selected();
        self.ctx.show(0, 0, &prefixed('>', current)).await;
        if let Some(next) = MenuEntry::at(self.selected + 1) {
            self.ctx.show(0, 1, &prefixed(' ', next)).await;
        }
    }

    /// One iteration of the menu loop, including its sleep.
    pub async fn step(&mut self) {
        let (sample, edges) = self.ctx.poll();

        let mut moved = false;
        let mut pressed = false;
        for edge in edges {
            match edge {
                InputEvent::AxisMovedUp => {
                    self.selected = select_prev(self.selected, MenuEntry::COUNT);
                    moved = true;
                }
                InputEvent::AxisMovedDown => {
                    self.selected = select_next(self.selected, MenuEntry::COUNT);
                    moved = true;
                }
                InputEvent::ButtonPressed => pressed = true,
            }
        }

        if moved {
            debug!("menu: selected {}", self.selected());
            self.draw_menu().await;
            self.idle.record_activity(self.ctx.clock.now_ms());
        }

        if pressed {
            self.ctx.wait_release().await;
            self.idle.record_activity(self.ctx.clock.now_ms());
            let entry = self.selected();
            run_mode(&mut self.ctx, entry).await;
            self.idle.record_activity(self.ctx.clock.now_ms());
            self.draw_menu().await;
        }

        match self.idle.tick(self.ctx.clock.now_ms()) {
            ActivityState::Idle => {
                self.ctx.show(1, 1, IDLE_LABEL).await;
                let frame = self.idle.next_marquee_frame();
                self.ctx.show(0, 0, &frame).await;

                // Level check, not an edge: a stick held over a threshold
                // wakes the menu on every idle frame.
                if sample.pressed || sample.axis_deflected() {
                    self.idle.record_activity(self.ctx.clock.now_ms());
                    self.draw_menu().await;
                }
                self.ctx.clock.delay_ms(IDLE_FRAME_MS).await;
            }
            ActivityState::Active => {
                self.ctx.clock.delay_ms(MENU_POLL_MS).await;
            }
        }
    }
}

fn prefixed(marker: char, entry: MenuEntry) -> Line {
    let mut line = Line::new();
    let _ = line.push(marker);
    let _ = line.push_str(entry.label());
    line
}
