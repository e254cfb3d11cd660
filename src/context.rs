//! Everything the menu and the modes share: the peripherals, the event log
//! and the joystick edge detector.
//!
//! There is exactly one `Context`; whoever holds `&mut Context` owns the
//! display and input until it returns.

use crate::config::BUTTON_RELEASE_POLL_MS;
use crate::error::Error;
use crate::event_log::BoundedLog;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::input_logic::{Debouncer, Edges, InputSample};

pub struct Context<D, N, J, C, M> {
    pub display: D,
    pub network: N,
    pub joystick: J,
    pub clock: C,
    pub memory: M,
    pub log: BoundedLog,
    pub debouncer: Debouncer,
}

impl<D, N, J, C, M> Context<D, N, J, C, M>
where
    D: TextDisplay,
    N: Network,
    J: Joystick,
    C: Clock,
    M: MemoryProbe,
{
    pub fn new(display: D, network: N, joystick: J, clock: C, memory: M) -> Self {
        Self {
            display,
            network,
            joystick,
            clock,
            memory,
            log: BoundedLog::new(),
            debouncer: Debouncer::new(),
        }
    }

    /// Write text, logging (not propagating) display failures.
    pub async fn show(&mut self, col: u8, row: u8, text: &str) {
        if let Err(e) = self.display.write_at(col, row, text).await {
            report_display_error(e);
        }
    }

    pub async fn clear(&mut self) {
        if let Err(e) = self.display.clear().await {
            report_display_error(e);
        }
    }

    pub fn sample(&mut self) -> InputSample {
        InputSample {
            axis: self.joystick.read_axis(),
            pressed: self.joystick.read_button(),
        }
    }

    /// Take one sample and run it through the edge detector.
    pub fn poll(&mut self) -> (InputSample, Edges) {
        let sample = self.sample();
        let edges = self.debouncer.update(sample);
        (sample, edges)
    }

    /// Block until the button reads released.
    ///
    /// Called after acting on a press so that one physical press is one
    /// action, however long it is held.
    pub async fn wait_release(&mut self) {
        while self.joystick.read_button() {
            self.clock.delay_ms(BUTTON_RELEASE_POLL_MS).await;
        }
        self.debouncer.note_released();
    }
}

fn report_display_error(e: Error) {
    warn!("lcd: write failed: {}", e);
}
