//! Full-screen modes reachable from the menu.
//!
//! Every mode has the same shape: draw its static parts once on entry, then
//! render one step per tick until it asks to stop or the button is pressed.
//! The timing (tick interval, sleep, exit check) is owned by [`run_mode`] so
//! the individual modes only describe what they show.

mod about;
mod cyber_hud;
mod net_status;
mod scan;
mod system_log;

pub use about::About;
pub use cyber_hud::CyberHud;
pub use net_status::NetStatus;
pub use scan::ScanMode;
pub use system_log::SystemLog;

use crate::config::LOG_ENTRY_LEN;
use crate::context::Context;
use crate::hal::{Clock, Joystick, MemoryProbe, Network, TextDisplay};
use crate::ui::{InputEvent, MenuEntry};
use heapless::String;

/// What a mode wants after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeStep {
    Continue,
    Exit,
}

/// One running mode and its private state.
pub enum Mode {
    CyberHud(CyberHud),
    NetStatus(NetStatus),
    ScanMode(ScanMode),
    SystemLog(SystemLog),
    About(About),
}

impl Mode {
    /// Fresh state for `entry`, started at `now_ms`.
    pub fn for_entry(entry: MenuEntry, now_ms: u64) -> Self {
        match entry {
            MenuEntry::CyberHud => Mode::CyberHud(CyberHud::new()),
            MenuEntry::NetStatus => Mode::NetStatus(NetStatus),
            MenuEntry::ScanMode => Mode::ScanMode(ScanMode::new(now_ms)),
            MenuEntry::SystemLog => Mode::SystemLog(SystemLog::new()),
            MenuEntry::About => Mode::About(About::new()),
        }
    }

    pub fn entry(&self) -> MenuEntry {
        match self {
            Mode::CyberHud(_) => MenuEntry::CyberHud,
            Mode::NetStatus(_) => MenuEntry::NetStatus,
            Mode::ScanMode(_) => MenuEntry::ScanMode,
            Mode::SystemLog(_) => MenuEntry::SystemLog,
            Mode::About(_) => MenuEntry::About,
        }
    }

    /// Sleep between two ticks, in ms. May depend on what was just shown.
    pub fn tick_interval_ms(&self) -> u32 {
        match self {
            Mode::CyberHud(m) => m.tick_interval_ms(),
            Mode::NetStatus(m) => m.tick_interval_ms(),
            Mode::ScanMode(m) => m.tick_interval_ms(),
            Mode::SystemLog(m) => m.tick_interval_ms(),
            Mode::About(m) => m.tick_interval_ms(),
        }
    }

    /// Draw the parts of the screen that never change while the mode runs.
    pub async fn enter<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>)
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        match self {
            Mode::CyberHud(_) => {}
            Mode::NetStatus(m) => m.enter(ctx).await,
            Mode::ScanMode(m) => m.enter(ctx).await,
            Mode::SystemLog(m) => m.enter(ctx).await,
            Mode::About(m) => m.enter(ctx).await,
        }
    }

    pub async fn tick<D, N, J, C, M>(&mut self, ctx: &mut Context<D, N, J, C, M>) -> ModeStep
    where
        D: TextDisplay,
        N: Network,
        J: Joystick,
        C: Clock,
        M: MemoryProbe,
    {
        match self {
            Mode::CyberHud(m) => m.tick(ctx).await,
            Mode::NetStatus(m) => m.tick(ctx).await,
            Mode::ScanMode(m) => m.tick(ctx).await,
            Mode::SystemLog(m) => m.tick(ctx).await,
            Mode::About(m) => m.tick(ctx).await,
        }
    }
}

/// Hand the display and joystick to `entry` until it exits.
///
/// Logs "Entered X" / "Exited X" to the event log. Exits on a button press
/// (after the button is released again) or when the mode itself finishes.
pub async fn run_mode<D, N, J, C, M>(ctx: &mut Context<D, N, J, C, M>, entry: MenuEntry)
where
    D: TextDisplay,
    N: Network,
    J: Joystick,
    C: Clock,
    M: MemoryProbe,
{
    let mut mode = Mode::for_entry(entry, ctx.clock.now_ms());

    ctx.clear().await;
    ctx.log.append(&transition_text("Entered ", entry));
    info!("mode: entered {}", entry);
    mode.enter(ctx).await;

    loop {
        if mode.tick(ctx).await == ModeStep::Exit {
            info!("mode: {} finished on its own", entry);
            break;
        }

        ctx.clock.delay_ms(mode.tick_interval_ms()).await;

        let (_, edges) = ctx.poll();
        if edges.contains(&InputEvent::ButtonPressed) {
            ctx.wait_release().await;
            info!("mode: {} left by button", entry);
            break;
        }
    }

    ctx.log.append(&transition_text("Exited ", mode.entry()));
}

fn transition_text(verb: &str, entry: MenuEntry) -> String<LOG_ENTRY_LEN> {
    let mut text = String::new();
    let _ = text.push_str(verb);
    let _ = text.push_str(entry.label());
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_text_holds_longest_label() {
        assert_eq!(
            transition_text("Entered ", MenuEntry::SystemLog).as_str(),
            "Entered SYSTEM LOG"
        );
        assert_eq!(
            transition_text("Exited ", MenuEntry::CyberHud).as_str(),
            "Exited CYBER HUD"
        );
    }

    #[test]
    fn each_entry_gets_its_own_mode_and_interval() {
        let expected = [
            (MenuEntry::CyberHud, 200),
            (MenuEntry::NetStatus, 100),
            (MenuEntry::ScanMode, 50),
            (MenuEntry::SystemLog, 50),
            (MenuEntry::About, 10),
        ];
        for (entry, interval) in expected {
            let mode = Mode::for_entry(entry, 0);
            assert_eq!(mode.entry(), entry);
            assert_eq!(mode.tick_interval_ms(), interval);
        }
    }
}
