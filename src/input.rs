//! Debounced sampling of buttons and joystick axes.
//!
//! [`InputSampler`] is polled once per tick with the current hardware readings
//! (through an [`InputSource`]) and turns them into one-shot events: a button
//! `clicked` on an accepted press, an axis `changed` on an accepted move into
//! a new non-neutral direction. Events stay visible until the next
//! [`sample`](InputSampler::sample) call.
//!
//! Reads are best-effort. A pin that cannot be read counts as released and an
//! analog channel that cannot be read counts as centered, so sampling never
//! fails and the game loop never stops because of an input.

use crate::config::Config;
use crate::time::{TimeInstant, has_elapsed};
use embedded_hal::digital::InputPin;

/// Logical buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button A: decrement / previous.
    Decrement,
    /// Button B: increment / next.
    Increment,
    /// Joystick push switch: confirm.
    Confirm,
}

impl Button {
    /// All buttons, in sampling order.
    pub const ALL: [Button; 3] = [Button::Decrement, Button::Increment, Button::Confirm];

    const fn index(self) -> usize {
        match self {
            Button::Decrement => 0,
            Button::Increment => 1,
            Button::Confirm => 2,
        }
    }
}

/// Joystick axes, each read as an independent analog channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal: moves between cells and frames.
    X,
    /// Vertical: moves between rows.
    Y,
}

impl Axis {
    /// Both axes, in sampling order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Classified position of one joystick axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pushed toward the high rail (right / up).
    Positive,
    /// Pushed toward the low rail (left / down).
    Negative,
    /// Inside the middle band.
    #[default]
    Neutral,
}

impl Direction {
    /// Classifies a raw reading.
    ///
    /// Readings below `threshold` are `Negative`, readings above
    /// `full_scale - threshold` are `Positive`, everything else (and a
    /// missing reading) is `Neutral`.
    pub fn classify(reading: Option<u16>, threshold: u16, full_scale: u16) -> Self {
        match reading {
            Some(raw) if raw < threshold => Direction::Negative,
            Some(raw) if raw > full_scale.saturating_sub(threshold) => Direction::Positive,
            _ => Direction::Neutral,
        }
    }
}

/// Hardware seam for the sampler.
///
/// Implement this for your board, or use [`PinInputs`] with `embedded-hal` pins.
pub trait InputSource {
    /// `true` while `button` is physically held. Read failures should report `false`.
    fn button_active(&mut self, button: Button) -> bool;

    /// Raw analog reading for `axis`, or `None` if it could not be read.
    fn axis_reading(&mut self, axis: Axis) -> Option<u16>;
}

/// A single-ended analog channel, such as one ADC input.
pub trait AnalogChannel {
    /// Takes one reading. Returns `None` if the conversion failed.
    fn read(&mut self) -> Option<u16>;
}

/// [`InputSource`] over three active-low buttons with pull-ups and two analog channels.
pub struct PinInputs<A, B, S, X, Y> {
    decrement: A,
    increment: B,
    confirm: S,
    x: X,
    y: Y,
}

impl<A, B, S, X, Y> PinInputs<A, B, S, X, Y>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
    X: AnalogChannel,
    Y: AnalogChannel,
{
    /// Wraps already configured pins and channels.
    pub fn new(decrement: A, increment: B, confirm: S, x: X, y: Y) -> Self {
        Self {
            decrement,
            increment,
            confirm,
            x,
            y,
        }
    }

    /// Releases the pins and channels.
    pub fn release(self) -> (A, B, S, X, Y) {
        (self.decrement, self.increment, self.confirm, self.x, self.y)
    }
}

impl<A, B, S, X, Y> InputSource for PinInputs<A, B, S, X, Y>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
    X: AnalogChannel,
    Y: AnalogChannel,
{
    fn button_active(&mut self, button: Button) -> bool {
        // Pulled up: a press pulls the pin low.
        match button {
            Button::Decrement => self.decrement.is_low().unwrap_or(false),
            Button::Increment => self.increment.is_low().unwrap_or(false),
            Button::Confirm => self.confirm.is_low().unwrap_or(false),
        }
    }

    fn axis_reading(&mut self, axis: Axis) -> Option<u16> {
        match axis {
            Axis::X => self.x.read(),
            Axis::Y => self.y.read(),
        }
    }
}

/// Debounce state of one button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonState<I: TimeInstant> {
    button: Button,
    last_click: Option<I>,
    pressed: bool,
    clicked: bool,
}

impl<I: TimeInstant> ButtonState<I> {
    /// A released button that has never clicked.
    pub const fn new(button: Button) -> Self {
        Self {
            button,
            last_click: None,
            pressed: false,
            clicked: false,
        }
    }

    /// Which button this state tracks.
    #[inline]
    pub fn button(&self) -> Button {
        self.button
    }

    /// Raw level seen by the latest sample.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// One-shot press event from the latest sample.
    #[inline]
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// Feeds one raw sample.
    pub fn update(&mut self, active: bool, now: I, debounce: I::Duration) {
        self.clicked = active && !self.pressed && has_elapsed(self.last_click, now, debounce);
        if self.clicked {
            self.last_click = Some(now);
        }
        self.pressed = active;
    }
}

/// Debounce state of one joystick axis.
#[derive(Debug, Clone, Copy)]
pub struct JoystickState<I: TimeInstant> {
    axis: Axis,
    direction: Direction,
    last_change: Option<I>,
    changed: bool,
}

impl<I: TimeInstant> JoystickState<I> {
    /// A centered axis that has never moved.
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            direction: Direction::Neutral,
            last_change: None,
            changed: false,
        }
    }

    /// Which axis this state tracks.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Direction classified by the latest sample.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One-shot move event from the latest sample.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Feeds one classified sample.
    ///
    /// The remembered direction follows every sample, `Neutral` included, so
    /// holding the stick fires once and a release followed by a new push
    /// fires again.
    pub fn update(&mut self, direction: Direction, now: I, debounce: I::Duration) {
        self.changed = direction != self.direction
            && direction != Direction::Neutral
            && has_elapsed(self.last_change, now, debounce);
        if self.changed {
            self.last_change = Some(now);
        }
        self.direction = direction;
    }
}

/// Snapshot of one tick's events, as consumed by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvents {
    /// Confirm clicked.
    pub confirm: bool,
    /// Decrement clicked.
    pub decrement: bool,
    /// Increment clicked.
    pub increment: bool,
    /// New X direction, only on the tick the axis changed.
    pub x: Option<Direction>,
    /// New Y direction, only on the tick the axis changed.
    pub y: Option<Direction>,
}

impl InputEvents {
    /// `true` if "previous" was requested: Decrement clicked or X moved negative.
    #[inline]
    pub fn wants_previous(&self) -> bool {
        self.decrement || self.x == Some(Direction::Negative)
    }

    /// `true` if "next" was requested: Increment clicked or X moved positive.
    #[inline]
    pub fn wants_next(&self) -> bool {
        self.increment || self.x == Some(Direction::Positive)
    }
}

/// Polls every control once per tick and holds the resulting events.
#[derive(Debug, Clone)]
pub struct InputSampler<I: TimeInstant> {
    buttons: [ButtonState<I>; 3],
    axes: [JoystickState<I>; 2],
    debounce: I::Duration,
    axis_threshold: u16,
    axis_full_scale: u16,
}

impl<I: TimeInstant> InputSampler<I> {
    /// Creates a sampler with every control released and centered.
    pub fn new(config: &Config<I::Duration>) -> Self {
        Self {
            buttons: Button::ALL.map(ButtonState::new),
            axes: Axis::ALL.map(JoystickState::new),
            debounce: config.debounce(),
            axis_threshold: config.axis_threshold(),
            axis_full_scale: config.axis_full_scale(),
        }
    }

    /// Reads every control from `source` and refreshes this tick's events.
    pub fn sample<S: InputSource + ?Sized>(&mut self, source: &mut S, now: I) {
        for state in &mut self.buttons {
            let active = source.button_active(state.button);
            state.update(active, now, self.debounce);
        }

        for state in &mut self.axes {
            let direction = Direction::classify(
                source.axis_reading(state.axis),
                self.axis_threshold,
                self.axis_full_scale,
            );
            state.update(direction, now, self.debounce);
        }
    }

    /// `true` while `button` was held at the latest sample.
    #[inline]
    pub fn pressed(&self, button: Button) -> bool {
        self.button_state(button).is_pressed()
    }

    /// `true` if `button` produced an accepted click at the latest sample.
    #[inline]
    pub fn clicked(&self, button: Button) -> bool {
        self.button_state(button).is_clicked()
    }

    /// `true` if `axis` moved into a new direction at the latest sample.
    #[inline]
    pub fn changed(&self, axis: Axis) -> bool {
        self.joystick_state(axis).is_changed()
    }

    /// Direction of `axis` at the latest sample.
    #[inline]
    pub fn direction(&self, axis: Axis) -> Direction {
        self.joystick_state(axis).direction()
    }

    /// Debounce state of `button`.
    pub fn button_state(&self, button: Button) -> &ButtonState<I> {
        &self.buttons[button.index()]
    }

    /// Debounce state of `axis`.
    pub fn joystick_state(&self, axis: Axis) -> &JoystickState<I> {
        &self.axes[axis.index()]
    }

    /// This tick's events.
    pub fn events(&self) -> InputEvents {
        let moved = |axis: Axis| self.changed(axis).then(|| self.direction(axis));
        InputEvents {
            confirm: self.clicked(Button::Confirm),
            decrement: self.clicked(Button::Decrement),
            increment: self.clicked(Button::Increment),
            x: moved(Axis::X),
            y: moved(Axis::Y),
        }
    }
}
