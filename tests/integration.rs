//! Integration tests for the menu, the modes and the startup join.
//!
//! Everything runs against in-memory peripherals on a virtual clock:
//! `delay_ms` advances time instantly and the joystick replays a timeline
//! keyed on that clock, so a test reads as "at t = 100 ms the button goes
//! down".

use std::cell::Cell;
use std::rc::Rc;

use cyberdeck::hal::{
    AddressText, Clock, Joystick, MemoryProbe, Network, ScanResult, ScanResults, TextDisplay,
};
use cyberdeck::modes::{ModeStep, SystemLog};
use cyberdeck::{
    join_network, run_mode, ActivityState, Context, Error, JoinOutcome, MenuController, MenuEntry,
};
use embassy_futures::block_on;

const REST: u16 = 32_768;
const UP: u16 = 1_000;
const DOWN: u16 = 60_000;

const BLANK: &str = "                ";

// ---------------------------------------------------------------------------
// Fake peripherals
// ---------------------------------------------------------------------------

/// 16x2 character buffer that also records every write.
struct Screen {
    rows: [[char; 16]; 2],
    writes: Vec<(u8, String)>,
    broken: bool,
}

impl Screen {
    fn new() -> Self {
        Self {
            rows: [[' '; 16]; 2],
            writes: Vec::new(),
            broken: false,
        }
    }

    fn row(&self, row: usize) -> String {
        self.rows[row].iter().collect()
    }

    fn row_writes(&self, row: u8) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == row)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl TextDisplay for Screen {
    async fn clear(&mut self) -> Result<(), Error> {
        if self.broken {
            return Err(Error::Display);
        }
        self.rows = [[' '; 16]; 2];
        Ok(())
    }

    async fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), Error> {
        if self.broken {
            return Err(Error::Display);
        }
        self.writes.push((row, text.to_string()));
        let cells = &mut self.rows[usize::from(row)];
        for (i, c) in text.chars().enumerate() {
            let Some(cell) = cells.get_mut(usize::from(col) + i) else {
                break;
            };
            *cell = c;
        }
        Ok(())
    }
}

struct VirtualClock(Rc<Cell<u64>>);

impl Clock for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.0.set(self.0.get() + u64::from(ms));
    }
}

/// Replays `(from_ms, axis, pressed)` steps; the last step that has
/// started wins. Before the first step the stick rests.
struct Stick {
    now: Rc<Cell<u64>>,
    timeline: Vec<(u64, u16, bool)>,
}

impl Stick {
    fn current(&self) -> (u16, bool) {
        let now = self.now.get();
        self.timeline
            .iter()
            .rev()
            .find(|(from, _, _)| *from <= now)
            .map(|&(_, axis, pressed)| (axis, pressed))
            .unwrap_or((REST, false))
    }
}

impl Joystick for Stick {
    fn read_axis(&mut self) -> u16 {
        self.current().0
    }

    fn read_button(&mut self) -> bool {
        self.current().1
    }
}

struct FakeNet {
    now: Rc<Cell<u64>>,
    /// Link (and DHCP lease) comes up at this time; `None` = never.
    link_up_at: Option<u64>,
    name: &'static str,
    address: Option<&'static str>,
    networks: Result<Vec<(&'static str, i16)>, Error>,
    join_result: Result<(), Error>,
    connect_calls: usize,
    scans: usize,
}

impl Network for FakeNet {
    fn is_connected(&self) -> bool {
        self.link_up_at.is_some_and(|t| self.now.get() >= t)
    }

    async fn connect(&mut self, _ssid: &str, _password: &str) -> Result<(), Error> {
        self.connect_calls += 1;
        self.join_result
    }

    fn local_address(&self) -> Option<AddressText> {
        let mut text = AddressText::new();
        text.push_str(self.address?).ok()?;
        Some(text)
    }

    fn current_network_name(&self) -> Option<&str> {
        self.is_connected().then_some(self.name)
    }

    async fn scan(&mut self) -> Result<ScanResults, Error> {
        self.scans += 1;
        let mut results = ScanResults::new();
        for (name, dbm) in self.networks.clone()? {
            results
                .push(ScanResult::from_ssid_bytes(name.as_bytes(), dbm))
                .map_err(|_| Error::Scan)?;
        }
        Ok(results)
    }
}

struct FreeRam(usize);

impl MemoryProbe for FreeRam {
    fn free_bytes(&self) -> usize {
        self.0
    }
}

type TestContext = Context<Screen, FakeNet, Stick, VirtualClock, FreeRam>;
type TestMenu = MenuController<Screen, FakeNet, Stick, VirtualClock, FreeRam>;

/// Context at t = 0 with an offline network and 850 bytes free.
fn rig(timeline: &[(u64, u16, bool)]) -> TestContext {
    let now = Rc::new(Cell::new(0));
    Context::new(
        Screen::new(),
        FakeNet {
            now: now.clone(),
            link_up_at: None,
            name: "",
            address: None,
            networks: Ok(Vec::new()),
            join_result: Ok(()),
            connect_calls: 0,
            scans: 0,
        },
        Stick {
            now: now.clone(),
            timeline: timeline.to_vec(),
        },
        VirtualClock(now),
        FreeRam(850),
    )
}

/// Button held from `down` until `up`, stick at rest.
fn press(down: u64, up: u64) -> [(u64, u16, bool); 2] {
    [(down, REST, true), (up, REST, false)]
}

fn log_of(ctx: &TestContext) -> Vec<String> {
    ctx.log.recent(usize::MAX).map(str::to_string).collect()
}

fn step_until(menu: &mut TestMenu, t: u64) {
    while menu.context().clock.now_ms() < t {
        block_on(menu.step());
    }
}

// ---------------------------------------------------------------------------
// Menu navigation
// ---------------------------------------------------------------------------

#[test]
fn menu_draws_selected_and_next_entry() {
    let mut menu = MenuController::new(rig(&[]));
    block_on(menu.draw_menu());

    let screen = &menu.context().display;
    assert_eq!(screen.row(0), ">CYBER HUD      ");
    assert_eq!(screen.row(1), " NET STATUS     ");
}

#[test]
fn axis_edges_move_selection_once_per_deflection() {
    let timeline = [
        (0, REST, false),
        (50, DOWN, false),
        (100, REST, false),
        (150, DOWN, false),
        (250, REST, false),
        (300, UP, false),
        (350, REST, false),
    ];
    let mut menu = MenuController::new(rig(&timeline));

    step_until(&mut menu, 150);
    assert_eq!(menu.selected(), MenuEntry::NetStatus);

    // Held down for two polls: still a single move.
    step_until(&mut menu, 300);
    assert_eq!(menu.selected(), MenuEntry::ScanMode);

    step_until(&mut menu, 400);
    assert_eq!(menu.selected(), MenuEntry::NetStatus);

    let screen = &menu.context().display;
    assert_eq!(screen.row(0), ">NET STATUS     ");
    assert_eq!(screen.row(1), " SCAN MODE      ");
}

#[test]
fn selection_wraps_both_ways() {
    let timeline = [
        (0, REST, false),
        (50, UP, false),
        (100, REST, false),
        (150, DOWN, false),
    ];
    let mut menu = MenuController::new(rig(&timeline));

    step_until(&mut menu, 100);
    assert_eq!(menu.selected(), MenuEntry::About);
    assert_eq!(menu.context().display.row(0), ">ABOUT          ");
    // Last entry: nothing below it.
    assert_eq!(menu.context().display.row(1), BLANK);

    step_until(&mut menu, 200);
    assert_eq!(menu.selected_index(), 0);
}

#[test]
fn first_sample_deflected_up_is_not_an_edge() {
    // The edge detector starts from a previous reading of 0.
    let mut menu = MenuController::new(rig(&[(0, UP, false)]));
    block_on(menu.step());
    assert_eq!(menu.selected(), MenuEntry::CyberHud);
}

#[test]
fn held_button_runs_selected_mode_once() {
    let mut menu = MenuController::new(rig(&press(0, 6_000)));

    block_on(menu.step());
    // Released at 6 s, then 20 HUD frames of 200 ms, then one menu poll.
    assert_eq!(menu.context().clock.now_ms(), 10_050);

    block_on(menu.step());
    assert_eq!(
        log_of(menu.context()),
        ["Entered CYBER HUD", "Exited CYBER HUD"]
    );
    assert_eq!(menu.context().display.row(0), ">CYBER HUD      ");
}

// ---------------------------------------------------------------------------
// Idle marquee
// ---------------------------------------------------------------------------

#[test]
fn goes_idle_after_timeout_and_scrolls_marquee() {
    let mut menu = MenuController::new(rig(&[]));
    block_on(menu.draw_menu());

    step_until(&mut menu, 14_999);
    assert_eq!(menu.activity_state(), ActivityState::Active);

    block_on(menu.step());
    assert_eq!(menu.activity_state(), ActivityState::Idle);
    assert_eq!(menu.context().clock.now_ms(), 15_300);

    let screen = &menu.context().display;
    assert_eq!(screen.row(0), "   CYBER DECK   ");
    assert_eq!(screen.row(1), "      Idle      ");

    block_on(menu.step());
    assert_eq!(menu.context().display.row(0), "    CYBER DECK  ");
    assert_eq!(menu.context().clock.now_ms(), 15_600);
}

#[test]
fn axis_edge_wakes_idle_menu_and_moves() {
    let mut menu = MenuController::new(rig(&[(0, REST, false), (15_300, UP, false)]));
    block_on(menu.draw_menu());

    step_until(&mut menu, 15_300);
    assert_eq!(menu.activity_state(), ActivityState::Idle);

    block_on(menu.step());
    assert_eq!(menu.activity_state(), ActivityState::Active);
    assert_eq!(menu.selected(), MenuEntry::About);
    assert_eq!(menu.context().display.row(0), ">ABOUT          ");
}

#[test]
fn held_stick_wakes_idle_menu_without_an_edge() {
    // Down edge at t = 0, then held: the only activity is at t = 0.
    let mut menu = MenuController::new(rig(&[(0, DOWN, false)]));

    step_until(&mut menu, 15_000);
    assert_eq!(menu.selected(), MenuEntry::NetStatus);

    block_on(menu.step());
    assert_eq!(menu.activity_state(), ActivityState::Active);
    assert_eq!(menu.selected(), MenuEntry::NetStatus);

    let screen = &menu.context().display;
    assert!(screen.row_writes(0).contains(&"   CYBER DECK   "));
    assert_eq!(screen.row(0), ">NET STATUS     ");
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[test]
fn cyber_hud_exits_after_twenty_frames() {
    let mut ctx = rig(&[]);
    block_on(run_mode(&mut ctx, MenuEntry::CyberHud));

    assert_eq!(ctx.clock.now_ms(), 4_000);
    assert_eq!(ctx.display.row(0), "SIG:||||||||    ");
    assert_eq!(ctx.display.row(1), "CPU: ACTIVE     ");
    assert_eq!(ctx.display.row_writes(0).len(), 20);
    assert_eq!(log_of(&ctx), ["Entered CYBER HUD", "Exited CYBER HUD"]);
}

#[test]
fn cyber_hud_bar_is_clipped_to_the_row() {
    let mut ctx = rig(&[]);
    ctx.memory = FreeRam(100_000);
    block_on(run_mode(&mut ctx, MenuEntry::CyberHud));
    assert_eq!(ctx.display.row(0), "SIG:||||||||||||");
}

#[test]
fn button_press_leaves_about_after_release() {
    let mut ctx = rig(&press(100, 150));
    block_on(run_mode(&mut ctx, MenuEntry::About));

    assert_eq!(ctx.clock.now_ms(), 150);
    assert_eq!(ctx.display.row(1), "Version 1.0     ");

    let titles = ctx.display.row_writes(0);
    assert_eq!(titles.len(), 10);
    assert_eq!(titles[0], "PICO CYBERDECKPI");
    assert_eq!(titles[1], "ICO CYBERDECKPIC");
    assert_eq!(log_of(&ctx), ["Entered ABOUT", "Exited ABOUT"]);
}

#[test]
fn net_status_shows_name_and_address() {
    let mut ctx = rig(&press(200, 250));
    ctx.network.link_up_at = Some(0);
    ctx.network.name = "HomeNet";
    ctx.network.address = Some("10.0.0.7");
    block_on(run_mode(&mut ctx, MenuEntry::NetStatus));

    assert_eq!(ctx.display.row(0), "NET STATUS      ");
    assert_eq!(ctx.display.row(1), "HomeNet 10.0.0.7");
}

#[test]
fn net_status_offline_when_link_is_down() {
    let mut ctx = rig(&press(200, 250));
    // A stale address with the link down is still offline.
    ctx.network.address = Some("10.0.0.7");
    block_on(run_mode(&mut ctx, MenuEntry::NetStatus));

    assert_eq!(ctx.display.row(1), "Offline         ");
    assert_eq!(log_of(&ctx), ["Entered NET STATUS", "Exited NET STATUS"]);
}

#[test]
fn scan_mode_cycles_through_results() {
    let mut ctx = rig(&press(4_700, 4_750));
    ctx.network.link_up_at = Some(0);
    ctx.network.networks = Ok(vec![("cafe", -67), ("office", -40)]);
    block_on(run_mode(&mut ctx, MenuEntry::ScanMode));

    assert_eq!(ctx.display.row(0), "SCANNING...     ");
    // Refreshes at 1550, 3100 and 4650 ms.
    assert_eq!(
        ctx.display.row_writes(1),
        ["cafe -67dBm ||| ", "office -40dBm ||", "cafe -67dBm ||| "]
    );
    assert_eq!(ctx.network.scans, 3);
}

#[test]
fn scan_mode_reports_wifi_off_without_scanning() {
    let mut ctx = rig(&press(1_600, 1_650));
    block_on(run_mode(&mut ctx, MenuEntry::ScanMode));

    assert_eq!(ctx.display.row_writes(1), ["WiFi OFF        "]);
    assert_eq!(ctx.network.scans, 0);
}

#[test]
fn scan_mode_reports_empty_scan() {
    let mut ctx = rig(&press(1_600, 1_650));
    ctx.network.link_up_at = Some(0);
    block_on(run_mode(&mut ctx, MenuEntry::ScanMode));

    assert_eq!(ctx.display.row(1), "No networks     ");
}

#[test]
fn scan_mode_reports_scan_failure() {
    let mut ctx = rig(&press(1_600, 1_650));
    ctx.network.link_up_at = Some(0);
    ctx.network.networks = Err(Error::Scan);
    block_on(run_mode(&mut ctx, MenuEntry::ScanMode));

    assert_eq!(ctx.display.row(1), "Scan failed     ");
}

#[test]
fn system_log_alternates_two_most_recent_entries() {
    let mut ctx = rig(&press(2_100, 2_150));
    ctx.log.append("alpha");
    ctx.log.append("beta");
    block_on(run_mode(&mut ctx, MenuEntry::SystemLog));

    assert_eq!(ctx.display.row(0), "> SYSTEM LOG    ");
    // Each entry stays up for 20 polls of 50 ms.
    assert_eq!(
        ctx.display.row_writes(1),
        ["beta            ", "Entered SYSTEM L", "beta            "]
    );
    assert_eq!(log_of(&ctx).last().map(String::as_str), Some("Exited SYSTEM LOG"));
}

#[test]
fn system_log_with_empty_log_says_so_and_slows_down() {
    let mut ctx = rig(&[]);
    let mut mode = SystemLog::new();
    assert_eq!(block_on(mode.tick(&mut ctx)), ModeStep::Continue);

    assert_eq!(ctx.display.row_writes(1), ["No logs yet     "]);
    assert_eq!(mode.tick_interval_ms(), 100);

    // Polling speeds back up once something is logged.
    ctx.log.append("Entered ABOUT");
    block_on(mode.tick(&mut ctx));
    assert_eq!(ctx.display.row(1), "Entered ABOUT   ");
    assert_eq!(mode.tick_interval_ms(), 50);
}

#[test]
fn event_log_keeps_last_five_transitions() {
    let mut ctx = rig(&[]);
    for _ in 0..3 {
        block_on(run_mode(&mut ctx, MenuEntry::CyberHud));
    }

    let log = log_of(&ctx);
    assert_eq!(log.len(), 5);
    assert_eq!(log[0], "Exited CYBER HUD");
    assert_eq!(log[4], "Exited CYBER HUD");
}

#[test]
fn display_failures_do_not_stop_a_mode() {
    let mut ctx = rig(&[]);
    ctx.display.broken = true;
    block_on(run_mode(&mut ctx, MenuEntry::CyberHud));

    assert_eq!(ctx.clock.now_ms(), 4_000);
    assert_eq!(log_of(&ctx), ["Entered CYBER HUD", "Exited CYBER HUD"]);
}

// ---------------------------------------------------------------------------
// Startup join
// ---------------------------------------------------------------------------

#[test]
fn join_skipped_when_already_connected() {
    let mut ctx = rig(&[]);
    ctx.network.link_up_at = Some(0);

    let outcome = block_on(join_network(&mut ctx, "ssid", "pass"));
    assert_eq!(outcome, JoinOutcome::AlreadyConnected);
    assert_eq!(ctx.network.connect_calls, 0);
    assert!(ctx.display.writes.is_empty());
}

#[test]
fn join_polls_until_link_comes_up() {
    let mut ctx = rig(&[]);
    ctx.network.link_up_at = Some(3_000);

    let outcome = block_on(join_network(&mut ctx, "ssid", "pass"));
    assert_eq!(outcome, JoinOutcome::Connected);
    assert_eq!(ctx.network.connect_calls, 1);
    assert_eq!(ctx.display.row(0), "Connecting Wi-Fi");
    assert_eq!(
        ctx.display.row_writes(1),
        [
            "Please wait...  ",
            "Please wait...  ",
            "Please wait...  ",
            "Connected!      "
        ]
    );
    // Three polls plus the one-second "Connected!" hold.
    assert_eq!(ctx.clock.now_ms(), 4_000);
}

#[test]
fn join_gives_up_after_timeout() {
    let mut ctx = rig(&[]);
    ctx.network.join_result = Err(Error::WifiJoin(15));

    let outcome = block_on(join_network(&mut ctx, "ssid", "pass"));
    assert_eq!(outcome, JoinOutcome::TimedOut);
    assert_eq!(ctx.display.row(1), "Failed to connec");
    assert_eq!(ctx.clock.now_ms(), 16_000);
}
