//! Serial encoding for the single-wire, self-clocked LED chain.
//!
//! The 25 LEDs are daisy-chained in a serpentine: row `y = 0` first, with
//! even rows wired from `x = 4` down to `x = 0` and odd rows from `x = 0` up
//! to `x = 4`. Each LED takes three bytes in Green, Red, Blue order. After the
//! last byte the line must stay low for at least [`RESET_GAP_US`] so the
//! chain latches the frame.

use crate::frame::{CELL_COUNT, Frame, GRID_HEIGHT, GRID_WIDTH};

/// Bytes per LED.
pub const BYTES_PER_CELL: usize = 3;

/// Bytes in one full frame transmission.
pub const FRAME_BYTES: usize = CELL_COUNT * BYTES_PER_CELL;

/// Minimum low time after a frame, in microseconds.
pub const RESET_GAP_US: u32 = 100;

/// Bit rate of the chain.
pub const BIT_RATE_HZ: u32 = 800_000;

/// Output stage for encoded frames.
///
/// Implement this for your LED driver (PIO, RMT, SPI, bit-banged GPIO).
/// The bytes are already in wire order. Transmission is blocking and cannot
/// fail; handle any hardware errors internally.
pub trait LedWire {
    /// Shifts one encoded frame out to the chain.
    fn write_frame(&mut self, grb: &[u8; FRAME_BYTES]);
}

impl<W: LedWire + ?Sized> LedWire for &mut W {
    fn write_frame(&mut self, grb: &[u8; FRAME_BYTES]) {
        (**self).write_frame(grb);
    }
}

/// Grid coordinate of the LED at `position` along the chain.
///
/// Returns `None` past the end of the chain.
pub const fn serpentine_cell(position: usize) -> Option<(usize, usize)> {
    if position >= CELL_COUNT {
        return None;
    }
    let y = position / GRID_WIDTH;
    let step = position % GRID_WIDTH;
    let x = if y % 2 == 0 { GRID_WIDTH - 1 - step } else { step };
    Some((x, y))
}

/// Chain position of the LED at `(x, y)`. Returns `None` outside the grid.
pub const fn serpentine_position(x: usize, y: usize) -> Option<usize> {
    if x >= GRID_WIDTH || y >= GRID_HEIGHT {
        return None;
    }
    let step = if y % 2 == 0 { GRID_WIDTH - 1 - x } else { x };
    Some(y * GRID_WIDTH + step)
}

/// Encodes `frame` into wire order.
pub fn encode_frame(frame: &Frame) -> [u8; FRAME_BYTES] {
    let mut out = [0u8; FRAME_BYTES];
    for (position, chunk) in out.chunks_exact_mut(BYTES_PER_CELL).enumerate() {
        let Some((x, y)) = serpentine_cell(position) else {
            break;
        };
        let rgb = frame.get(x, y).unwrap_or_default().intensity();
        chunk.copy_from_slice(&[rgb.green, rgb.red, rgb.blue]);
    }
    out
}

/// One bit on the wire: a high pulse followed by a low pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// High time in nanoseconds.
    pub high_ns: u16,
    /// Low time in nanoseconds.
    pub low_ns: u16,
}

impl Pulse {
    /// A `0` bit: short high, long low.
    pub const ZERO: Pulse = Pulse {
        high_ns: 400,
        low_ns: 850,
    };

    /// A `1` bit: long high, short low.
    pub const ONE: Pulse = Pulse {
        high_ns: 800,
        low_ns: 450,
    };

    /// Pulse for `bit`.
    #[inline]
    pub const fn for_bit(bit: bool) -> Pulse {
        if bit { Pulse::ONE } else { Pulse::ZERO }
    }

    /// Total bit period in nanoseconds.
    #[inline]
    pub const fn period_ns(&self) -> u32 {
        self.high_ns as u32 + self.low_ns as u32
    }
}

/// Pulses for one byte, most significant bit first.
pub fn encode_byte(byte: u8) -> [Pulse; 8] {
    let mut pulses = [Pulse::ZERO; 8];
    for (i, pulse) in pulses.iter_mut().enumerate() {
        *pulse = Pulse::for_bit((byte >> (7 - i)) & 1 != 0);
    }
    pulses
}

/// Pulses for a whole encoded frame, in transmission order.
pub fn frame_pulses(grb: &[u8; FRAME_BYTES]) -> impl Iterator<Item = Pulse> + '_ {
    grb.iter().flat_map(|byte| encode_byte(*byte))
}

/// [`LedWire`] over any `smart_leds::SmartLedsWrite` driver.
///
/// The frame is handed over one pixel at a time in chain order, as plain
/// `RGB8`; the driver applies its own byte order. Driver errors are dropped,
/// the next frame simply tries again.
#[cfg(feature = "smart-leds")]
pub struct SmartLedsWire<L> {
    driver: L,
}

#[cfg(feature = "smart-leds")]
impl<L> SmartLedsWire<L>
where
    L: smart_leds::SmartLedsWrite,
    L::Color: From<smart_leds::RGB8>,
{
    /// Wraps a WS2812 driver.
    pub fn new(driver: L) -> Self {
        Self { driver }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &L {
        &self.driver
    }

    /// Releases the driver.
    pub fn into_inner(self) -> L {
        self.driver
    }
}

#[cfg(feature = "smart-leds")]
impl<L> LedWire for SmartLedsWire<L>
where
    L: smart_leds::SmartLedsWrite,
    L::Color: From<smart_leds::RGB8>,
{
    fn write_frame(&mut self, grb: &[u8; FRAME_BYTES]) {
        let pixels = grb
            .chunks_exact(BYTES_PER_CELL)
            .map(|led| smart_leds::RGB8::new(led[1], led[0], led[2]));
        let _ = self.driver.write(pixels);
    }
}
