//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, thresholds and per-mode timing live here so they
//! can be tuned in one place. Nothing here changes at runtime.

// WiFi

/// Network name to join at startup (`WIFI_SSID=... cargo build`).
pub const WIFI_SSID: &str = match option_env!("WIFI_SSID") {
    Some(ssid) => ssid,
    None => "Wifi name",
};

/// Passphrase for [`WIFI_SSID`] (`WIFI_PASSWORD=... cargo build`).
pub const WIFI_PASSWORD: &str = match option_env!("WIFI_PASSWORD") {
    Some(pass) => pass,
    None => "Wifi password",
};

/// Give up on the startup join after this long (ms).
pub const WIFI_JOIN_TIMEOUT_MS: u64 = 15_000;

/// Connection state poll interval while joining (ms).
pub const WIFI_JOIN_POLL_MS: u32 = 1_000;

/// How long "Connected!" stays on screen before the menu (ms).
pub const WIFI_CONNECTED_HOLD_MS: u32 = 1_000;

/// Maximum number of networks kept from one scan.
pub const SCAN_MAX_RESULTS: usize = 16;

// Joystick

/// Axis readings below this are "up" (16-bit scale).
pub const AXIS_LOW_THRESHOLD: u16 = 10_000;

/// Axis readings above this are "down" (16-bit scale).
pub const AXIS_HIGH_THRESHOLD: u16 = 55_000;

/// Poll interval of the blocking wait-for-release (ms).
pub const BUTTON_RELEASE_POLL_MS: u32 = 50;

// GPIO pin assignments (Pico W)
//
//   Joystick Y     → GP27 / ADC1
//   Joystick SW    → GP22 (active-low, internal pull-up)
//   LCD I²C SDA    → GP6  (I2C1)
//   LCD I²C SCL    → GP7  (I2C1)
//   CYW43 PWR/CS   → GP23 / GP25, SPI over PIO0 on GP24 / GP29

// Menu loop

/// Menu loop period while active (ms).
pub const MENU_POLL_MS: u32 = 50;

/// Quiet time at the menu before the idle marquee starts (ms).
pub const IDLE_TIMEOUT_MS: u64 = 15_000;

/// Marquee frame period while idle (ms).
pub const IDLE_FRAME_MS: u32 = 300;

/// Text scrolled across row 0 while idle.
pub const IDLE_PHRASE: &str = "   CYBER DECK   ";

/// Static row 1 text while idle, written from column 1.
pub const IDLE_LABEL: &str = "     Idle    ";

// System log

/// Number of entries kept by the rolling log.
pub const LOG_CAPACITY: usize = 5;

/// Maximum bytes stored per log entry.
pub const LOG_ENTRY_LEN: usize = 24;

// Modes

/// Frames rendered by CYBER HUD before it returns on its own.
pub const HUD_FRAME_COUNT: u32 = 20;
pub const HUD_FRAME_MS: u32 = 200;

/// Free bytes represented by one `|` in the HUD bar.
pub const HUD_BYTES_PER_BAR: usize = 100;

pub const NET_STATUS_TICK_MS: u32 = 100;

pub const SCAN_POLL_MS: u32 = 50;

/// Minimum time between two network scans (ms).
pub const SCAN_REFRESH_MS: u64 = 1_500;

pub const SYSTEM_LOG_POLL_MS: u32 = 50;

/// Polls each log entry stays on screen (20 x 50 ms ≈ 1 s).
pub const SYSTEM_LOG_HOLD_POLLS: u32 = 20;

/// Number of most recent entries cycled by SYSTEM LOG.
pub const SYSTEM_LOG_SHOWN: usize = 2;

pub const SYSTEM_LOG_EMPTY_POLL_MS: u32 = 100;

pub const ABOUT_TICK_MS: u32 = 10;
pub const ABOUT_TITLE: &str = "PICO CYBERDECK";
pub const ABOUT_VERSION: &str = "Version 1.0";

// LCD

pub const LCD_COLS: usize = 16;
pub const LCD_ROWS: usize = 2;

/// PCF8574 backpack address (0x27, some modules ship as 0x3F).
pub const LCD_I2C_ADDRESS: u8 = 0x27;

pub const LCD_I2C_FREQUENCY_HZ: u32 = 100_000;
