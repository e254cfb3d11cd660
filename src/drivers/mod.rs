//! Pico W implementations of the `cyberdeck::hal` traits.
//!
//! - **lcd**: HD44780 16x2 behind a PCF8574 I²C expander
//! - **joystick**: ADC axis + active-low button
//! - **wifi**: CYW43439 station with an embassy-net DHCP stack
//! - **system**: Embassy time driver and free-RAM probe

pub mod joystick;
pub mod lcd;
pub mod system;
pub mod wifi;
