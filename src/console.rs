//! The fixed-period run loop that ties inputs, game and display together.

use crate::config::Config;
use crate::game::{GameController, GameState};
use crate::input::{InputSampler, InputSource};
use crate::matrix::DisplayMatrix;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::wire::LedWire;
use embedded_hal::delay::DelayNs;

/// The whole game console: owns every component and runs the tick loop.
///
/// Each [`tick`](Console::tick) samples the inputs, advances the game by one
/// step and transmits the display if it changed. [`run`](Console::run) repeats
/// that forever with a fixed sleep in between.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - Input hardware
/// * `W` - LED wire driver
/// * `D` - Blocking delay provider
pub struct Console<'t, I, T, S, W, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: InputSource,
    W: LedWire,
    D: DelayNs,
{
    time_source: &'t T,
    inputs: S,
    delay: D,
    sampler: InputSampler<I>,
    controller: GameController,
    display: DisplayMatrix<W>,
    tick_period: I::Duration,
}

impl<'t, I, T, S, W, D> Console<'t, I, T, S, W, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: InputSource,
    W: LedWire,
    D: DelayNs,
{
    /// Assembles a console in the `Init` state with a blank display.
    pub fn new(
        config: &Config<I::Duration>,
        time_source: &'t T,
        inputs: S,
        wire: W,
        delay: D,
    ) -> Self {
        Self {
            time_source,
            inputs,
            delay,
            sampler: InputSampler::new(config),
            controller: GameController::new(),
            display: DisplayMatrix::new(wire),
            tick_period: config.tick_period(),
        }
    }

    /// Runs one sample, step, render cycle and returns the resulting state.
    pub fn tick(&mut self) -> GameState {
        let now = self.time_source.now();
        self.sampler.sample(&mut self.inputs, now);

        let events = self.sampler.events();
        self.controller.step(&events, &mut self.display);

        self.display.render(&mut self.delay);
        self.controller.state()
    }

    /// Ticks forever, sleeping one tick period between ticks.
    pub fn run(&mut self) -> ! {
        let period_ms = u32::try_from(self.tick_period.as_millis()).unwrap_or(u32::MAX);
        loop {
            self.tick();
            self.delay.delay_ms(period_ms);
        }
    }

    /// The game controller.
    #[inline]
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// The input sampler.
    #[inline]
    pub fn sampler(&self) -> &InputSampler<I> {
        &self.sampler
    }

    /// The display.
    #[inline]
    pub fn display(&self) -> &DisplayMatrix<W> {
        &self.display
    }

    /// Mutable access to the input hardware, e.g. for board-level mocks.
    #[inline]
    pub fn inputs_mut(&mut self) -> &mut S {
        &mut self.inputs
    }

    /// The delay provider.
    #[inline]
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
