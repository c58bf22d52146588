//! The LED grid: a dirty-tracked [`Frame`] buffer in front of an [`LedWire`].
//!
//! Writes only touch the buffer. [`DisplayMatrix::render`] transmits the
//! buffer, and only when a cell actually changed since the last transmission,
//! because a transmission blocks for the whole chain plus the latch gap.
//! Callers redraw the full picture every tick; compose it in a scratch
//! [`Frame`] and apply it with [`DisplayMatrix::set_all`] so that unchanged
//! pictures cost nothing.

use crate::color::Color;
use crate::frame::{Frame, GRID_HEIGHT, GRID_WIDTH};
use crate::wire::{LedWire, RESET_GAP_US, encode_frame};
use embedded_hal::delay::DelayNs;

/// A 5×5 one-color mask.
///
/// Rows are listed top (`y = 4`) to bottom (`y = 0`); within a row bit 4 is
/// `x = 0` and bit 0 is `x = 4`, so the literals read like the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GRID_HEIGHT],
}

impl Glyph {
    /// Creates a glyph from top-to-bottom row masks.
    pub const fn new(rows: [u8; GRID_HEIGHT]) -> Self {
        Self { rows }
    }

    /// `true` if the glyph lights `(x, y)`.
    pub const fn is_lit(&self, x: usize, y: usize) -> bool {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return false;
        }
        let row = self.rows[GRID_HEIGHT - 1 - y];
        row & (1 << (GRID_WIDTH - 1 - x)) != 0
    }

    /// The glyph in `color` on a background frame.
    pub fn to_frame(&self, color: Color) -> Frame {
        let mut frame = Frame::blank();
        for x in 0..GRID_WIDTH {
            for y in 0..GRID_HEIGHT {
                if self.is_lit(x, y) {
                    frame.set(x, y, color);
                }
            }
        }
        frame
    }

    /// Glyph for decimal digit `digit`, if it is 0–9.
    pub const fn digit(digit: usize) -> Option<Glyph> {
        if digit < DIGITS.len() {
            Some(DIGITS[digit])
        } else {
            None
        }
    }
}

/// Digits 0–9, three columns wide, centered.
pub const DIGITS: [Glyph; 10] = [
    Glyph::new([0b01110, 0b01010, 0b01010, 0b01010, 0b01110]),
    Glyph::new([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]),
    Glyph::new([0b01110, 0b00010, 0b01110, 0b01000, 0b01110]),
    Glyph::new([0b01110, 0b00010, 0b01110, 0b00010, 0b01110]),
    Glyph::new([0b01010, 0b01010, 0b01110, 0b00010, 0b00010]),
    Glyph::new([0b01110, 0b01000, 0b01110, 0b00010, 0b01110]),
    Glyph::new([0b01110, 0b01000, 0b01110, 0b01010, 0b01110]),
    Glyph::new([0b01110, 0b00010, 0b00010, 0b00010, 0b00010]),
    Glyph::new([0b01110, 0b01010, 0b01110, 0b01010, 0b01110]),
    Glyph::new([0b01110, 0b01010, 0b01110, 0b00010, 0b01110]),
];

/// Idle face.
pub const SMILE: Glyph = Glyph::new([0b00000, 0b01010, 0b00000, 0b10001, 0b01110]);

/// Correct answer.
pub const CHECK: Glyph = Glyph::new([0b00001, 0b00010, 0b10100, 0b01000, 0b00000]);

/// Wrong answer.
pub const CROSS: Glyph = Glyph::new([0b10001, 0b01010, 0b00100, 0b01010, 0b10001]);

/// Dirty-tracked grid buffer bound to an LED wire.
pub struct DisplayMatrix<W: LedWire> {
    wire: W,
    frame: Frame,
    dirty: bool,
}

impl<W: LedWire> DisplayMatrix<W> {
    /// Creates a matrix with a blank buffer.
    ///
    /// The buffer starts dirty so the first [`render`](Self::render) blanks
    /// whatever the chain showed at power-up.
    pub fn new(wire: W) -> Self {
        Self {
            wire,
            frame: Frame::blank(),
            dirty: true,
        }
    }

    /// Stores `color` at `(x, y)`. Coordinates outside the grid are ignored.
    ///
    /// Only a write that changes the cell marks the buffer dirty.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if self.frame.get(x, y).is_some_and(|current| current != color) {
            self.frame.set(x, y, color);
            self.dirty = true;
        }
    }

    /// Copies a full frame into the buffer, cell by cell.
    pub fn set_all(&mut self, frame: &Frame) {
        for (x, y, color) in frame.cells() {
            self.set(x, y, color);
        }
    }

    /// Sets every cell to the background color.
    pub fn clear(&mut self) {
        self.set_all(&Frame::blank());
    }

    /// Clears the buffer and stamps `glyph` in `color`.
    pub fn show_glyph(&mut self, glyph: &Glyph, color: Color) {
        self.set_all(&glyph.to_frame(color));
    }

    /// Shows decimal digit `digit`. Values above 9 leave the buffer untouched.
    pub fn show_digit(&mut self, digit: usize, color: Color) {
        if let Some(glyph) = Glyph::digit(digit) {
            self.show_glyph(&glyph, color);
        }
    }

    /// Shows the idle face.
    pub fn show_smile(&mut self, color: Color) {
        self.show_glyph(&SMILE, color);
    }

    /// Shows the checkmark.
    pub fn show_check(&mut self, color: Color) {
        self.show_glyph(&CHECK, color);
    }

    /// Shows the cross.
    pub fn show_cross(&mut self, color: Color) {
        self.show_glyph(&CROSS, color);
    }

    /// Transmits the buffer if it changed since the last transmission.
    ///
    /// Blocks for the transmission and the latch gap. Returns `true` if a
    /// frame was sent.
    pub fn render<D: DelayNs + ?Sized>(&mut self, delay: &mut D) -> bool {
        if !self.dirty {
            return false;
        }

        let grb = encode_frame(&self.frame);
        self.wire.write_frame(&grb);
        delay.delay_us(RESET_GAP_US);
        self.dirty = false;
        true
    }

    /// `true` if a cell changed since the last transmission.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current buffer contents.
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Color at `(x, y)` in the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.frame.get(x, y)
    }

    /// Borrows the wire.
    #[inline]
    pub fn wire(&self) -> &W {
        &self.wire
    }

    /// Releases the wire.
    pub fn into_wire(self) -> W {
        self.wire
    }
}
