//! The peripherals the menu and modes need, as traits.
//!
//! The firmware implements these over the LCD backpack, the joystick ADC,
//! the CYW43 radio and the Embassy time driver (`src/drivers/`); tests
//! implement them over in-memory fakes.

use crate::config::{LOG_ENTRY_LEN, SCAN_MAX_RESULTS};
use crate::error::Error;
use heapless::{String, Vec};

/// A character display addressed by column and row.
#[allow(async_fn_in_trait)]
pub trait TextDisplay {
    /// Blank every cell and home the cursor.
    async fn clear(&mut self) -> Result<(), Error>;

    /// Overwrite cells starting at (`col`, `row`). Text past the last
    /// column is dropped.
    async fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), Error>;
}

/// One network seen by a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanResult {
    pub name: String<32>,
    pub signal_dbm: i16,
}

impl ScanResult {
    /// Build a result from raw SSID bytes; invalid UTF-8 bytes become `?`.
    pub fn from_ssid_bytes(ssid: &[u8], signal_dbm: i16) -> Self {
        let mut name = String::new();
        for chunk in ssid.utf8_chunks() {
            for c in chunk.valid().chars() {
                if name.push(c).is_err() {
                    return Self { name, signal_dbm };
                }
            }
            if !chunk.invalid().is_empty() && name.push('?').is_err() {
                break;
            }
        }
        Self { name, signal_dbm }
    }
}

pub type ScanResults = Vec<ScanResult, SCAN_MAX_RESULTS>;

/// Dotted-quad address text ("192.168.100.200" is the longest).
pub type AddressText = String<LOG_ENTRY_LEN>;

/// A WiFi station interface.
#[allow(async_fn_in_trait)]
pub trait Network {
    /// Associated and holding an IP address.
    fn is_connected(&self) -> bool;

    /// Attempt to join `ssid`. Returning does not imply the link is up;
    /// poll [`Network::is_connected`] for that.
    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Error>;

    /// Current IPv4 address, if one has been assigned.
    fn local_address(&self) -> Option<AddressText>;

    /// Name of the joined network, if any.
    fn current_network_name(&self) -> Option<&str>;

    /// Run one scan and collect what it saw.
    async fn scan(&mut self) -> Result<ScanResults, Error>;
}

/// Joystick with one analog axis and an active-low push button.
pub trait Joystick {
    /// Axis position on a 16-bit scale (0..=65535, rest near the middle).
    fn read_axis(&mut self) -> u16;

    /// `true` while the button is held down.
    fn read_button(&mut self) -> bool;
}

/// Monotonic millisecond clock plus a cooperative sleep.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Milliseconds since `since`, safe across counter wraparound.
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().wrapping_sub(since)
    }

    async fn delay_ms(&mut self, ms: u32);
}

/// Free RAM introspection, only used for the CYBER HUD bar.
pub trait MemoryProbe {
    fn free_bytes(&self) -> usize;
}
