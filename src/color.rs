//! The fixed game palette.
//!
//! Every grid cell holds a [`Color`]. The enum discriminant is the palette
//! index, and [`Color::intensity`] maps it to the low-brightness `Srgb<u8>`
//! value the LED wire expects. Arithmetic on the index always wraps, so a
//! `Color` can never leave the palette.

use palette::Srgb;

/// Intensity used for every lit channel. Kept low so 25 LEDs stay within a
/// USB-powered budget.
pub const CHANNEL_LEVEL: u8 = 16;

/// One of the eight palette entries. `Black` is the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
    Yellow = 5,
    Cyan = 6,
    Magenta = 7,
}

/// `{R, G, B}` intensities, indexed by palette index.
const INTENSITY: [Srgb<u8>; Color::COUNT] = [
    Srgb::new(0, 0, 0),
    Srgb::new(CHANNEL_LEVEL, CHANNEL_LEVEL, CHANNEL_LEVEL),
    Srgb::new(CHANNEL_LEVEL, 0, 0),
    Srgb::new(0, CHANNEL_LEVEL, 0),
    Srgb::new(0, 0, CHANNEL_LEVEL),
    Srgb::new(CHANNEL_LEVEL, CHANNEL_LEVEL, 0),
    Srgb::new(0, CHANNEL_LEVEL, CHANNEL_LEVEL),
    Srgb::new(CHANNEL_LEVEL, 0, CHANNEL_LEVEL),
];

impl Color {
    /// Number of palette entries.
    pub const COUNT: usize = 8;

    /// All palette entries in index order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
    ];

    /// Palette entry for `index`, wrapping modulo [`Color::COUNT`].
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Palette index of this color.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next palette entry; the last entry wraps to `Black`.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous palette entry; `Black` wraps to the last entry.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// `true` for the background color.
    #[inline]
    pub const fn is_background(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Channel intensities sent to the LEDs for this color.
    #[inline]
    pub const fn intensity(self) -> Srgb<u8> {
        INTENSITY[self.index()]
    }
}
