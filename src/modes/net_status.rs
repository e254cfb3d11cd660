//! NET STATUS - joined network and IP address, or "Offline".

use super::ModeStep;
use crate::config::NET_STATUS_TICK_MS;
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::{fit_line, net_status_line};

pub struct NetStatus;

impl NetStatus {
    pub fn tick_interval_ms(&self) -> u32 {
        NET_STATUS_TICK_MS
    }

    pub async fn enter<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>)
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        ctx.show(0, 0, "NET STATUS").await;
    }

    /// Re-read the link every tick; connectivity can change under us.
    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        let line = match ctx.network.local_address() {
            Some(address) if ctx.network.is_connected() => {
                let name = ctx.network.current_network_name().unwrap_or("");
                net_status_line(name, &address)
            }
            _ => fit_line("Offline"),
        };
        ctx.show(0, 1, &line).await;
        ModeStep::Continue
    }
}
