//! User interface - menu entries, joystick edges, the top-level menu loop
//! and the fixed-width text helpers shared by every screen.
//!
//! ## Components
//!
//! - **Input logic**: joystick samples to discrete edges, wrapping selection
//! - **Menu**: the `MenuController` state machine (menu / mode / idle)
//! - **Text**: 16-column line builders (bars, padded rows, marquee windows)

pub mod input_logic;
pub mod menu;
pub mod text;

/// Entries of the top-level menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEntry {
    CyberHud,
    NetStatus,
    ScanMode,
    SystemLog,
    About,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 5] = [
        MenuEntry::CyberHud,
        MenuEntry::NetStatus,
        MenuEntry::ScanMode,
        MenuEntry::SystemLog,
        MenuEntry::About,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::CyberHud => "CYBER HUD",
            MenuEntry::NetStatus => "NET STATUS",
            MenuEntry::ScanMode => "SCAN MODE",
            MenuEntry::SystemLog => "SYSTEM LOG",
            MenuEntry::About => "ABOUT",
        }
    }

    /// Entry at `index`, or `None` past the end.
    pub fn at(index: usize) -> Option<MenuEntry> {
        Self::ALL.get(index).copied()
    }
}

/// Joystick events after edge detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Axis crossed below the low threshold.
    AxisMovedUp,
    /// Axis crossed above the high threshold.
    AxisMovedDown,
    /// Button went from released to pressed.
    ButtonPressed,
}
