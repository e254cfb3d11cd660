//! Startup WiFi join with a hard time limit.
//!
//! One attempt, shown on the LCD. Failure is not fatal: the menu starts
//! anyway and the network modes report "Offline" / "WiFi OFF".

use crate::config::{WIFI_CONNECTED_HOLD_MS, WIFI_JOIN_POLL_MS, WIFI_JOIN_TIMEOUT_MS};
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::text::fit_line;

/// How the startup join ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoinOutcome {
    /// The link was already up; nothing was shown.
    AlreadyConnected,
    Connected,
    /// Not connected within the join timeout.
    TimedOut,
}

/// Join `ssid`, polling the link once per second for at most
/// [`WIFI_JOIN_TIMEOUT_MS`].
pub async fn join_network<D, N, J, C, M>(
    ctx: &mut Context<D, N, J, C, M>,
    ssid: &str,
    password: &str,
) -> JoinOutcome
where
    D: TextDisplay,
    N: Network,
    J: Joystick,
    C: Clock,
    M: MemoryProbe,
{
    if ctx.network.is_connected() {
        return JoinOutcome::AlreadyConnected;
    }

    ctx.show(0, 0, "Connecting Wi-Fi").await;
    info!("wifi: joining {}", ssid);

    let start = ctx.clock.now_ms();
    if let Err(e) = ctx.network.connect(ssid, password).await {
        warn!("wifi: join request failed: {}", e);
    }

    while !ctx.network.is_connected() {
        ctx.show(0, 1, &fit_line("Please wait...")).await;
        ctx.clock.delay_ms(WIFI_JOIN_POLL_MS).await;
        if ctx.clock.elapsed_ms(start) > WIFI_JOIN_TIMEOUT_MS {
            warn!("wifi: not connected after {} ms", WIFI_JOIN_TIMEOUT_MS);
            ctx.show(0, 1, &fit_line("Failed to connect")).await;
            return JoinOutcome::TimedOut;
        }
    }

    info!("wifi: connected");
    ctx.show(0, 1, &fit_line("Connected!")).await;
    ctx.clock.delay_ms(WIFI_CONNECTED_HOLD_MS).await;
    JoinOutcome::Connected
}
