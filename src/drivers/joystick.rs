//! Analog joystick: Y axis on an ADC channel, push button on a GPIO.

use cyberdeck::hal::Joystick;
use cyberdeck::Error;
use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embedded_hal::digital::InputPin;

/// Reported when a conversion fails, so a bad read is never an edge.
const AXIS_REST: u16 = 0x8000;

pub struct AnalogJoystick<'d, B> {
    adc: Adc<'d, Blocking>,
    axis: Channel<'d>,
    button: B,
}

impl<'d, B: InputPin> AnalogJoystick<'d, B> {
    pub fn new(adc: Adc<'d, Blocking>, axis: Channel<'d>, button: B) -> Self {
        Self { adc, axis, button }
    }
}

impl<'d, B: InputPin> Joystick for AnalogJoystick<'d, B> {
    fn read_axis(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.axis) {
            // 12-bit conversion scaled up to the 16-bit range.
            Ok(raw) => raw << 4,
            Err(e) => {
                warn!(
                    "joystick: {} ({:?})",
                    Error::Adc,
                    defmt::Debug2Format(&e)
                );
                AXIS_REST
            }
        }
    }

    /// Active-low with pull-up.
    fn read_button(&mut self) -> bool {
        self.button.is_low().unwrap_or(false)
    }
}
