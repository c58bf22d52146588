//! Shared test infrastructure for pattern-memory integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use pattern_memory::{
    Axis, Button, DisplayMatrix, Direction, FRAME_BYTES, InputEvents, InputSource, LedWire,
    TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Analog reading of a centered axis on a 12-bit ADC.
pub const CENTER: u16 = 2048;
/// Reading of an axis pushed to the low rail.
pub const LOW_RAIL: u16 = 0;
/// Reading of an axis pushed to the high rail.
pub const HIGH_RAIL: u16 = 4095;

/// Mock input hardware whose levels are set directly by the test
pub struct MockInputs {
    buttons: [bool; 3],
    axes: [Option<u16>; 2],
}

impl MockInputs {
    pub fn new() -> Self {
        Self {
            buttons: [false; 3],
            axes: [Some(CENTER); 2],
        }
    }

    pub fn set_button(&mut self, button: Button, active: bool) {
        self.buttons[button_slot(button)] = active;
    }

    pub fn set_axis(&mut self, axis: Axis, reading: Option<u16>) {
        self.axes[axis_slot(axis)] = reading;
    }

    pub fn release_all(&mut self) {
        self.buttons = [false; 3];
        self.axes = [Some(CENTER); 2];
    }
}

impl InputSource for MockInputs {
    fn button_active(&mut self, button: Button) -> bool {
        self.buttons[button_slot(button)]
    }

    fn axis_reading(&mut self, axis: Axis) -> Option<u16> {
        self.axes[axis_slot(axis)]
    }
}

fn button_slot(button: Button) -> usize {
    match button {
        Button::Decrement => 0,
        Button::Increment => 1,
        Button::Confirm => 2,
    }
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}

// ============================================================================
// Mock LED Wire and Delay
// ============================================================================

/// Mock LED wire that records transmitted frames
pub struct MockWire {
    frames_sent: usize,
    last_frame: Option<[u8; FRAME_BYTES]>,
}

impl MockWire {
    pub fn new() -> Self {
        Self {
            frames_sent: 0,
            last_frame: None,
        }
    }

    pub fn frames_sent(&self) -> usize {
        self.frames_sent
    }

    pub fn last_frame(&self) -> Option<&[u8; FRAME_BYTES]> {
        self.last_frame.as_ref()
    }
}

impl LedWire for MockWire {
    fn write_frame(&mut self, grb: &[u8; FRAME_BYTES]) {
        self.frames_sent += 1;
        self.last_frame = Some(*grb);
    }
}

/// Mock delay that only accumulates the requested time
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_us(&self) -> u64 {
        self.total_ns / 1000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn new_display() -> DisplayMatrix<MockWire> {
    DisplayMatrix::new(MockWire::new())
}

pub fn idle() -> InputEvents {
    InputEvents::default()
}

pub fn confirm() -> InputEvents {
    InputEvents {
        confirm: true,
        ..InputEvents::default()
    }
}

pub fn decrement() -> InputEvents {
    InputEvents {
        decrement: true,
        ..InputEvents::default()
    }
}

pub fn increment() -> InputEvents {
    InputEvents {
        increment: true,
        ..InputEvents::default()
    }
}

pub fn move_x(direction: Direction) -> InputEvents {
    InputEvents {
        x: Some(direction),
        ..InputEvents::default()
    }
}

pub fn move_y(direction: Direction) -> InputEvents {
    InputEvents {
        y: Some(direction),
        ..InputEvents::default()
    }
}
