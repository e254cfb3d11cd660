//! Unified error type for cyberdeck.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target
//! logging. None of these ever halt the firmware; callers log them and
//! degrade what is shown on the LCD.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// I²C transaction to the LCD backpack failed.
    Display,

    // Input
    /// The joystick ADC conversion failed.
    Adc,

    // WiFi
    /// The radio rejected the join request (raw CYW43 status).
    WifiJoin(u32),

    /// A network scan could not be started or was aborted.
    Scan,

    // Generic
    /// Operation timed out.
    Timeout,
}
