//! Time and memory introspection.

use cyberdeck::hal::{Clock, MemoryProbe};
use embassy_time::{Instant, Timer};

/// Milliseconds since boot from the RP2040 timer.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}

extern "C" {
    /// First byte after `.bss`/`.uninit`, provided by cortex-m-rt.
    static __sheap: u8;
}

/// RAM between the end of static data and the current stack pointer.
pub struct StackProbe;

impl MemoryProbe for StackProbe {
    fn free_bytes(&self) -> usize {
        let sp = cortex_m::register::msp::read() as usize;
        let statics_end = unsafe { core::ptr::addr_of!(__sheap) } as usize;
        sp.saturating_sub(statics_end)
    }
}
