//! Joystick edge detection and menu cursor movement.

use super::InputEvent;
use crate::config::{AXIS_HIGH_THRESHOLD, AXIS_LOW_THRESHOLD};
use heapless::Vec;

/// One joystick reading, taken once per loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    pub axis: u16,
    pub pressed: bool,
}

impl InputSample {
    /// Axis held past either threshold, regardless of what it was before.
    pub fn axis_deflected(&self) -> bool {
        self.axis < AXIS_LOW_THRESHOLD || self.axis > AXIS_HIGH_THRESHOLD
    }
}

/// Edges produced by a single sample (at most one axis edge and one press).
pub type Edges = Vec<InputEvent, 2>;

/// Turns consecutive samples into discrete edges.
///
/// Only the previous sample is remembered. The two thresholds are far
/// apart, so a stick resting near either one cannot chatter between up
/// and down.
pub struct Debouncer {
    last_axis: u16,
    last_pressed: bool,
}

impl Debouncer {
    /// The first sample is compared against a previous axis reading of 0.
    pub const fn new() -> Self {
        Self {
            last_axis: 0,
            last_pressed: false,
        }
    }

    pub fn update(&mut self, sample: InputSample) -> Edges {
        let mut edges = Edges::new();

        if let Some(edge) = axis_edge(self.last_axis, sample.axis) {
            let _ = edges.push(edge);
        }
        if sample.pressed && !self.last_pressed {
            let _ = edges.push(InputEvent::ButtonPressed);
        }

        self.last_axis = sample.axis;
        self.last_pressed = sample.pressed;
        edges
    }

    /// Record that the button was observed released outside of
    /// [`Debouncer::update`] (after a blocking wait-for-release).
    pub fn note_released(&mut self) {
        self.last_pressed = false;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis edge between two consecutive readings, if any.
pub fn axis_edge(previous: u16, current: u16) -> Option<InputEvent> {
    if current < AXIS_LOW_THRESHOLD && previous >= AXIS_LOW_THRESHOLD {
        Some(InputEvent::AxisMovedUp)
    } else if current > AXIS_HIGH_THRESHOLD && previous <= AXIS_HIGH_THRESHOLD {
        Some(InputEvent::AxisMovedDown)
    } else {
        None
    }
}

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}
