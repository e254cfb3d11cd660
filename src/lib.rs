//! Library interface for cyberdeck.
//!
//! Holds everything that does not touch hardware - the menu state machine,
//! the five modes, joystick edge detection, idle tracking and the rolling
//! event log - written against the traits in [`hal`] so it runs unchanged
//! on the Pico W and on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the drivers in `src/drivers/`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod context;
pub mod error;
pub mod event_log;
pub mod hal;
pub mod idle;
pub mod modes;
pub mod net;
pub mod ui;

pub use context::Context;
pub use error::Error;
pub use event_log::BoundedLog;
pub use idle::{ActivityState, IdleTracker};
pub use modes::{run_mode, Mode, ModeStep};
pub use net::{join_network, JoinOutcome};
pub use ui::menu::MenuController;
pub use ui::{InputEvent, MenuEntry};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
