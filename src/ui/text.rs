//! Fixed-width line builders for the 16x2 LCD.
//!
//! Everything here returns a `heapless::String` no wider than the display,
//! so callers never need to clip before writing.

use crate::config::{HUD_BYTES_PER_BAR, LCD_COLS};
use core::fmt::Write;
use heapless::String;

/// One full LCD row.
pub type Line = String<LCD_COLS>;

/// Copy up to `max` characters of `text` into `line`.
fn push_clipped(line: &mut Line, text: &str, max: usize) {
    for c in text.chars().take(max) {
        if line.push(c).is_err() {
            break;
        }
    }
}

fn pad_to_width(line: &mut Line) {
    while line.push(' ').is_ok() {}
}

/// `text` cut or space-padded to exactly one row, so it fully overwrites
/// whatever was on that row before.
pub fn fit_line(text: &str) -> Line {
    let mut line = Line::new();
    push_clipped(&mut line, text, LCD_COLS);
    pad_to_width(&mut line);
    line
}

/// `count` bar characters, at most one row wide.
pub fn bar(count: usize) -> Line {
    let mut line = Line::new();
    for _ in 0..count.min(LCD_COLS) {
        let _ = line.push('|');
    }
    line
}

/// HUD bar: one `|` per 100 free bytes.
pub fn memory_bar(free_bytes: usize) -> Line {
    bar(free_bytes / HUD_BYTES_PER_BAR)
}

/// Signal bars for a scan result: `(100 + dBm) / 10`, never fewer than one.
pub fn signal_bar_count(signal_dbm: i16) -> usize {
    let bars = (100 + i32::from(signal_dbm)) / 10;
    bars.max(1) as usize
}

/// `name` (first 8 chars), a space, then `address` right-aligned in the rest
/// of the row. An address wider than the space left keeps its last digits.
pub fn net_status_line(name: &str, address: &str) -> Line {
    let mut line = Line::new();
    push_clipped(&mut line, name, 8);
    let _ = line.push(' ');

    let room = LCD_COLS - line.len();
    let addr_len = address.chars().count();
    if addr_len > room {
        for c in address.chars().skip(addr_len - room) {
            let _ = line.push(c);
        }
    } else {
        for _ in 0..room - addr_len {
            let _ = line.push(' ');
        }
        push_clipped(&mut line, address, room);
    }
    line
}

/// `name` (first 8 chars), signal as `-67dBm`, then the signal bars,
/// clipped to one row.
pub fn scan_line(name: &str, signal_dbm: i16) -> Line {
    let mut text: String<48> = String::new();
    for c in name.chars().take(8) {
        let _ = text.push(c);
    }
    let _ = write!(text, " {:>3}dBm ", signal_dbm);
    let _ = text.push_str(bar(signal_bar_count(signal_dbm)).as_str());
    fit_line(&text)
}

/// One row of `text` repeated end to end, starting `offset` characters in.
///
/// For a text at least one row long this is the window into `text + text`
/// at `offset`, so stepping the offset scrolls without a visible seam.
pub fn cycle_window(text: &str, offset: usize) -> Line {
    let mut line = Line::new();
    if text.is_empty() {
        pad_to_width(&mut line);
        return line;
    }
    for c in text.chars().cycle().skip(offset).take(LCD_COLS) {
        let _ = line.push(c);
    }
    line
}
