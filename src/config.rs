//! Validated timing and input thresholds.

use crate::time::TimeDuration;

/// Default minimum spacing between two accepted transitions of one control, in ms.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Default polling period of the run loop, in ms.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 250;

/// Default distance from either rail that counts as a deflected joystick.
pub const DEFAULT_AXIS_THRESHOLD: u16 = 300;

/// Default full-scale reading of a 12-bit ADC.
pub const DEFAULT_AXIS_FULL_SCALE: u16 = (1 << 12) - 1;

/// Runtime configuration shared by the input sampler and the run loop.
///
/// Build one with [`Config::builder`], or take [`Config::default`].
///
/// The tick period is assumed to be longer than the shortest physical press,
/// otherwise a single press can span two samples. This is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<D: TimeDuration> {
    debounce: D,
    tick_period: D,
    axis_threshold: u16,
    axis_full_scale: u16,
}

impl<D: TimeDuration> Config<D> {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder<D> {
        ConfigBuilder::new()
    }

    /// Minimum spacing between two accepted transitions of one control.
    #[inline]
    pub fn debounce(&self) -> D {
        self.debounce
    }

    /// Run loop period.
    #[inline]
    pub fn tick_period(&self) -> D {
        self.tick_period
    }

    /// Distance from either rail that counts as a deflected axis.
    #[inline]
    pub fn axis_threshold(&self) -> u16 {
        self.axis_threshold
    }

    /// Highest reading an analog channel can return.
    #[inline]
    pub fn axis_full_scale(&self) -> u16 {
        self.axis_full_scale
    }
}

impl<D: TimeDuration> Default for Config<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            tick_period: D::from_millis(DEFAULT_TICK_PERIOD_MS),
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
            axis_full_scale: DEFAULT_AXIS_FULL_SCALE,
        }
    }
}

/// Builder for [`Config`] that validates on [`build`](ConfigBuilder::build).
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder<D: TimeDuration> {
    config: Config<D>,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    /// Starts from the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Sets the debounce interval. Zero disables debouncing.
    pub fn debounce(mut self, debounce: D) -> Self {
        self.config.debounce = debounce;
        self
    }

    /// Sets the run loop period.
    pub fn tick_period(mut self, tick_period: D) -> Self {
        self.config.tick_period = tick_period;
        self
    }

    /// Sets the deflection threshold.
    pub fn axis_threshold(mut self, threshold: u16) -> Self {
        self.config.axis_threshold = threshold;
        self
    }

    /// Sets the full-scale analog reading.
    pub fn axis_full_scale(mut self, full_scale: u16) -> Self {
        self.config.axis_full_scale = full_scale;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - The tick period is zero
    /// * `ZeroAxisThreshold` - The axis threshold is zero, so no reading is ever deflected
    /// * `AxisThresholdTooWide` - The two threshold bands overlap
    pub fn build(self) -> Result<Config<D>, ConfigError> {
        let config = self.config;

        if config.tick_period.as_millis() == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        if config.axis_threshold == 0 {
            return Err(ConfigError::ZeroAxisThreshold);
        }

        if u32::from(config.axis_threshold) * 2 >= u32::from(config.axis_full_scale) {
            return Err(ConfigError::AxisThresholdTooWide {
                threshold: config.axis_threshold,
                full_scale: config.axis_full_scale,
            });
        }

        Ok(config)
    }
}

impl<D: TimeDuration> Default for ConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero.
    ZeroTickPeriod,

    /// Axis threshold is zero.
    ZeroAxisThreshold,

    /// Negative and positive bands would meet or overlap.
    AxisThresholdTooWide { threshold: u16, full_scale: u16 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            ConfigError::ZeroAxisThreshold => write!(f, "axis threshold must be non-zero"),
            ConfigError::AxisThresholdTooWide {
                threshold,
                full_scale,
            } => write!(
                f,
                "axis threshold {} leaves no neutral band within full scale {}",
                threshold, full_scale
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
