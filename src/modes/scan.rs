//! SCAN MODE - periodic WiFi scan, one network shown per refresh.

use super::ModeStep;
use crate::config::{SCAN_POLL_MS, SCAN_REFRESH_MS};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::{fit_line, scan_line, Line};

pub struct ScanMode {
    last_scan_ms: u64,
    /// Round-robin position into the latest results.
    net_index: usize,
}

impl ScanMode {
    pub const fn new(now_ms: u64) -> Self {
        Self {
            last_scan_ms: now_ms,
            net_index: 0,
        }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        SCAN_POLL_MS
    }

    pub async fn enter<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>)
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        ctx.show(0, 0, "SCANNING...").await;
    }

    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        if ctx.clock.elapsed_ms(self.last_scan_ms) > SCAN_REFRESH_MS {
            self.last_scan_ms = ctx.clock.now_ms();
            let line = self.refresh(ctx).await;
            ctx.show(0, 1, &line).await;
        }
        ModeStep::Continue
    }

    async fn refresh<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> Line
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        if !ctx.network.is_connected() {
            return fit_line("WiFi OFF");
        }

        match ctx.network.scan().await {
            Ok(results) if results.is_empty() => fit_line("No networks"),
            Ok(results) => {
                let shown = &results[self.net_index % results.len()];
                debug!(
                    "scan: {} networks, showing {}",
                    results.len(),
                    shown.name.as_str()
                );
                self.net_index = self.net_index.wrapping_add(1);
                scan_line(&shown.name, shown.signal_dbm)
            }
            Err(e) => {
                warn!("scan: failed: {}", e);
                fit_line("Scan failed")
            }
        }
    }
}
