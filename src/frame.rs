//! Pattern snapshots and the sequences they are grouped into.

use crate::color::Color;
use heapless::Vec;

/// Grid width in cells.
pub const GRID_WIDTH: usize = 5;

/// Grid height in cells.
pub const GRID_HEIGHT: usize = 5;

/// Number of cells in one frame.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Longest sequence a game can use.
pub const MAX_FRAMES: usize = 9;

/// Shortest sequence a game can use.
pub const MIN_FRAMES: usize = 1;

/// One 5×5 pattern, indexed `(x, y)` with `y = 4` the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    cells: [[Color; GRID_HEIGHT]; GRID_WIDTH],
}

impl Frame {
    /// An all-background frame.
    pub const fn blank() -> Self {
        Self {
            cells: [[Color::Black; GRID_HEIGHT]; GRID_WIDTH],
        }
    }

    /// Color at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get(x)?.get(y).copied()
    }

    /// Stores `color` at `(x, y)`. Returns `false` (and changes nothing) outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.cells.get_mut(x).and_then(|column| column.get_mut(y)) {
            Some(cell) => {
                *cell = color;
                true
            }
            None => false,
        }
    }

    /// Sets every cell to the background color.
    pub fn clear(&mut self) {
        *self = Self::blank();
    }

    /// Iterates `(x, y, color)` over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column.iter().enumerate().map(move |(y, color)| (x, y, *color))
        })
    }

    /// `true` when every cell of `self` matches `other`.
    #[inline]
    pub fn matches(&self, other: &Frame) -> bool {
        compare(self, other)
    }
}

/// `true` when both frames hold the same color in every cell.
pub fn compare(a: &Frame, b: &Frame) -> bool {
    a.cells == b.cells
}

/// An ordered sequence of up to [`MAX_FRAMES`] frames.
///
/// The authored sequence and the player's reproduction are two independent
/// `FrameSet`s that are always reset to the same length.
#[derive(Debug, Clone, Default)]
pub struct FrameSet {
    frames: Vec<Frame, MAX_FRAMES>,
}

impl FrameSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Replaces the contents with `len` blank frames.
    ///
    /// `len` is clamped to `[MIN_FRAMES, MAX_FRAMES]`.
    pub fn reset(&mut self, len: usize) {
        let len = len.clamp(MIN_FRAMES, MAX_FRAMES);
        self.frames.clear();
        for _ in 0..len {
            // Cannot fail: len <= MAX_FRAMES.
            let _ = self.frames.push(Frame::blank());
        }
    }

    /// Number of frames in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` if the set holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Mutable frame at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    /// All frames in order.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
