//! Integration tests for InputSampler

mod common;
use common::*;

use pattern_memory::{
    AnalogChannel, Axis, Button, Config, Direction, InputSampler, InputSource, PinInputs,
};

fn sampler() -> InputSampler<TestInstant> {
    InputSampler::new(&Config::<TestDuration>::default())
}

#[test]
fn click_is_one_shot() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_button(Button::Confirm, true);
    sampler.sample(&mut inputs, TestInstant(0));
    assert!(sampler.clicked(Button::Confirm));
    assert!(sampler.pressed(Button::Confirm));

    // Still held on the next tick: no second click.
    sampler.sample(&mut inputs, TestInstant(250));
    assert!(!sampler.clicked(Button::Confirm));
    assert!(sampler.pressed(Button::Confirm));
}

#[test]
fn clicks_are_never_closer_than_debounce_interval() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();
    let mut last_click: Option<u64> = None;

    // Toggle the pin every 10 ms for two seconds.
    for t in (0..2000).step_by(10) {
        inputs.set_button(Button::Increment, (t / 10) % 2 == 0);
        sampler.sample(&mut inputs, TestInstant(t));
        if sampler.clicked(Button::Increment) {
            if let Some(previous) = last_click {
                assert!(t - previous >= 100, "clicks at {previous} and {t}");
            }
            last_click = Some(t);
        }
    }
    assert!(last_click.is_some());
}

#[test]
fn pressed_tracks_raw_level_between_debounce_windows() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_button(Button::Decrement, true);
    sampler.sample(&mut inputs, TestInstant(0));
    inputs.set_button(Button::Decrement, false);
    sampler.sample(&mut inputs, TestInstant(20));
    assert!(!sampler.pressed(Button::Decrement));

    inputs.set_button(Button::Decrement, true);
    sampler.sample(&mut inputs, TestInstant(40));
    assert!(sampler.pressed(Button::Decrement));
    assert!(!sampler.clicked(Button::Decrement));
}

#[test]
fn buttons_are_independent() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_button(Button::Decrement, true);
    inputs.set_button(Button::Increment, true);
    sampler.sample(&mut inputs, TestInstant(0));

    assert!(sampler.clicked(Button::Decrement));
    assert!(sampler.clicked(Button::Increment));
    assert!(!sampler.clicked(Button::Confirm));
}

#[test]
fn joystick_fires_once_while_held() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_axis(Axis::X, Some(HIGH_RAIL));
    sampler.sample(&mut inputs, TestInstant(0));
    assert!(sampler.changed(Axis::X));
    assert_eq!(sampler.direction(Axis::X), Direction::Positive);

    for tick in 1..5 {
        sampler.sample(&mut inputs, TestInstant(tick * 250));
        assert!(!sampler.changed(Axis::X));
    }
}

#[test]
fn joystick_fires_again_after_returning_to_center() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_axis(Axis::Y, Some(LOW_RAIL));
    sampler.sample(&mut inputs, TestInstant(0));
    assert!(sampler.changed(Axis::Y));

    inputs.set_axis(Axis::Y, Some(CENTER));
    sampler.sample(&mut inputs, TestInstant(250));
    assert!(!sampler.changed(Axis::Y));
    assert_eq!(sampler.direction(Axis::Y), Direction::Neutral);

    inputs.set_axis(Axis::Y, Some(LOW_RAIL));
    sampler.sample(&mut inputs, TestInstant(500));
    assert!(sampler.changed(Axis::Y));
    assert_eq!(sampler.direction(Axis::Y), Direction::Negative);
}

#[test]
fn joystick_flip_inside_debounce_window_is_dropped() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_axis(Axis::X, Some(HIGH_RAIL));
    sampler.sample(&mut inputs, TestInstant(0));
    assert!(sampler.changed(Axis::X));

    inputs.set_axis(Axis::X, Some(LOW_RAIL));
    sampler.sample(&mut inputs, TestInstant(50));
    assert!(!sampler.changed(Axis::X));
    // The reading is still remembered, so holding it does not fire later.
    assert_eq!(sampler.direction(Axis::X), Direction::Negative);
    sampler.sample(&mut inputs, TestInstant(300));
    assert!(!sampler.changed(Axis::X));
}

#[test]
fn unreadable_axis_is_neutral() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_axis(Axis::X, None);
    sampler.sample(&mut inputs, TestInstant(0));
    assert!(!sampler.changed(Axis::X));
    assert_eq!(sampler.direction(Axis::X), Direction::Neutral);
}

#[test]
fn events_snapshot_matches_queries() {
    let mut sampler = sampler();
    let mut inputs = MockInputs::new();

    inputs.set_button(Button::Confirm, true);
    inputs.set_axis(Axis::Y, Some(HIGH_RAIL));
    sampler.sample(&mut inputs, TestInstant(0));

    let events = sampler.events();
    assert!(events.confirm);
    assert!(!events.decrement && !events.increment);
    assert_eq!(events.x, None);
    assert_eq!(events.y, Some(Direction::Positive));
}

#[test]
fn custom_thresholds_are_applied() {
    let config = Config::<TestDuration>::builder()
        .axis_full_scale(1023)
        .axis_threshold(100)
        .build()
        .unwrap();
    let mut sampler = InputSampler::<TestInstant>::new(&config);
    let mut inputs = MockInputs::new();

    inputs.set_axis(Axis::X, Some(950));
    sampler.sample(&mut inputs, TestInstant(0));
    assert_eq!(sampler.direction(Axis::X), Direction::Positive);
}

// ============================================================================
// PinInputs over embedded-hal pins
// ============================================================================

mod pins {
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

    /// Pulled-up pin: `low == true` means pressed.
    pub struct FakePin {
        pub low: bool,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    /// Pin whose reads always fail.
    pub struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }
}

struct FakeAdc(Option<u16>);

impl AnalogChannel for FakeAdc {
    fn read(&mut self) -> Option<u16> {
        self.0
    }
}

#[test]
fn pin_inputs_treat_low_as_pressed() {
    let mut inputs = PinInputs::new(
        pins::FakePin { low: true },
        pins::FakePin { low: false },
        pins::FakePin { low: false },
        FakeAdc(Some(LOW_RAIL)),
        FakeAdc(Some(CENTER)),
    );

    assert!(inputs.button_active(Button::Decrement));
    assert!(!inputs.button_active(Button::Increment));
    assert_eq!(inputs.axis_reading(Axis::X), Some(LOW_RAIL));
    assert_eq!(inputs.axis_reading(Axis::Y), Some(CENTER));
}

#[test]
fn pin_read_errors_count_as_released() {
    let mut inputs = PinInputs::new(
        pins::BrokenPin,
        pins::BrokenPin,
        pins::BrokenPin,
        FakeAdc(None),
        FakeAdc(None),
    );
    let mut sampler = sampler();

    sampler.sample(&mut inputs, TestInstant(0));
    for button in Button::ALL {
        assert!(!sampler.clicked(button));
        assert!(!sampler.pressed(button));
    }
    for axis in Axis::ALL {
        assert_eq!(sampler.direction(axis), Direction::Neutral);
    }
}

#[test]
fn pin_inputs_accept_pins_with_different_error_types() {
    let mut inputs = PinInputs::new(
        pins::FakePin { low: true },
        pins::BrokenPin,
        pins::FakePin { low: true },
        FakeAdc(Some(HIGH_RAIL)),
        FakeAdc(None),
    );
    let mut sampler = sampler();

    sampler.sample(&mut inputs, TestInstant(0));
    assert!(sampler.clicked(Button::Decrement));
    assert!(!sampler.pressed(Button::Increment));
    assert!(sampler.clicked(Button::Confirm));
    assert_eq!(sampler.direction(Axis::X), Direction::Positive);
    assert_eq!(sampler.direction(Axis::Y), Direction::Neutral);
}
