//! HD44780 character LCD driven through a PCF8574 I²C backpack.
//!
//! The backpack maps the expander pins as:
//! ```text
//! P0: RS (0 = command, 1 = data)
//! P1: RW (held low, write only)
//! P2: EN strobe
//! P3: backlight
//! P4-P7: D4-D7 (the controller runs in 4-bit mode)
//! ```

use cyberdeck::config::{LCD_COLS, LCD_ROWS};
use cyberdeck::hal::TextDisplay;
use cyberdeck::Error;
use embassy_time::Timer;
use embedded_hal_async::i2c::I2c;

const RS_BIT: u8 = 0b0000_0001;
const EN_BIT: u8 = 0b0000_0100;
const BL_BIT: u8 = 0b0000_1000;

const CMD_CLEAR: u8 = 0x01;
/// Increment cursor, no display shift.
const CMD_ENTRY_MODE: u8 = 0x06;
/// Display on, cursor off, blink off.
const CMD_DISPLAY_ON: u8 = 0x0C;
/// 4-bit bus, 2 lines, 5x8 font.
const CMD_FUNCTION_SET: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of column 0 on each row.
const ROW_OFFSETS: [u8; LCD_ROWS] = [0x00, 0x40];

pub struct Lcd1602<I2C> {
    i2c: I2C,
    address: u8,
    /// Carried in every expander write; P3 drives the backlight transistor.
    backlight: bool,
}

impl<I2C: I2c> Lcd1602<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            backlight: true,
        }
    }

    /// Reset into 4-bit mode and clear the screen (backlight on).
    pub async fn init(&mut self) -> Result<(), Error> {
        // Controller needs >40 ms after Vcc rises.
        Timer::after_millis(50).await;

        // Three 8-bit "function set" nibbles, then switch to 4-bit.
        self.send_nibble(0x03, false).await?;
        Timer::after_millis(5).await;
        self.send_nibble(0x03, false).await?;
        Timer::after_micros(150).await;
        self.send_nibble(0x03, false).await?;
        Timer::after_micros(150).await;
        self.send_nibble(0x02, false).await?;
        Timer::after_micros(150).await;

        self.command(CMD_FUNCTION_SET).await?;
        self.command(CMD_DISPLAY_ON).await?;
        self.command(CMD_ENTRY_MODE).await?;
        self.clear().await
    }

    async fn expander_write(&mut self, data: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[data])
            .await
            .map_err(|_| Error::Display)
    }

    /// Latch `data` into the controller with an EN pulse.
    async fn pulse_enable(&mut self, data: u8) -> Result<(), Error> {
        self.expander_write(data | EN_BIT).await?;
        Timer::after_micros(1).await;
        self.expander_write(data & !EN_BIT).await?;
        Timer::after_micros(50).await;
        Ok(())
    }

    async fn send_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), Error> {
        let mut data = (nibble & 0x0F) << 4;
        if rs {
            data |= RS_BIT;
        }
        if self.backlight {
            data |= BL_BIT;
        }
        self.pulse_enable(data).await
    }

    /// High nibble first.
    async fn send_byte(&mut self, byte: u8, rs: bool) -> Result<(), Error> {
        self.send_nibble(byte >> 4, rs).await?;
        self.send_nibble(byte & 0x0F, rs).await
    }

    async fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.send_byte(cmd, false).await
    }

    async fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        let offset = ROW_OFFSETS[usize::from(row)];
        self.command(CMD_SET_DDRAM | (offset + col)).await
    }
}

impl<I2C: I2c> TextDisplay for Lcd1602<I2C> {
    async fn clear(&mut self) -> Result<(), Error> {
        self.command(CMD_CLEAR).await?;
        // Clear is the one slow instruction (1.52 ms).
        Timer::after_millis(2).await;
        Ok(())
    }

    async fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), Error> {
        let col_idx = usize::from(col);
        if usize::from(row) >= LCD_ROWS || col_idx >= LCD_COLS {
            return Ok(());
        }

        self.set_cursor(col, row).await?;
        for c in text.chars().take(LCD_COLS - col_idx) {
            // The character ROM only matches ASCII in the printable range.
            let byte = if c.is_ascii() && !c.is_ascii_control() {
                c as u8
            } else {
                b'?'
            };
            self.send_byte(byte, true).await?;
        }
        Ok(())
    }
}
