#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InputSampler`**: Polls buttons and joystick axes once per tick and produces debounced one-shot events
//! - **`InputSource`**: Trait to implement for your input hardware (or use `PinInputs` with `embedded-hal` pins)
//! - **`DisplayMatrix`**: Dirty-tracked 5×5 grid buffer that transmits only when changed
//! - **`LedWire`**: Trait to implement for your LED driver; receives frames already in serpentine GRB order
//! - **`GameController`**: The six-state game, advanced one step per tick from `InputEvents`
//! - **`GameSession`**: Everything the game remembers between ticks
//! - **`Console`**: Owns all of the above and runs the fixed-period loop
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are a fixed eight-entry palette ([`Color`]); intensities are
//! `Srgb<u8>` values capped at 16 per channel.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod log;

pub mod color;
pub mod config;
pub mod console;
pub mod frame;
pub mod game;
pub mod input;
pub mod matrix;
pub mod time;
pub mod wire;

pub use color::Color;
pub use config::{Config, ConfigBuilder, ConfigError};
pub use console::Console;
pub use frame::{Frame, FrameSet, GRID_HEIGHT, GRID_WIDTH, MAX_FRAMES, MIN_FRAMES, compare};
pub use game::{Cursor, GameController, GameSession, GameState, VerdictPhase};
pub use input::{
    AnalogChannel, Axis, Button, ButtonState, Direction, InputEvents, InputSampler, InputSource,
    JoystickState, PinInputs,
};
pub use matrix::{DisplayMatrix, Glyph};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use wire::{FRAME_BYTES, LedWire, Pulse, RESET_GAP_US};
#[cfg(feature = "smart-leds")]
pub use wire::SmartLedsWire;
