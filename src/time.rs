//! Time abstraction traits for platform-agnostic debouncing and tick pacing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Returns `true` when at least `interval` has passed between `since` and `now`.
///
/// `None` means the event never happened, which always counts as elapsed.
pub(crate) fn has_elapsed<I: TimeInstant>(since: Option<I>, now: I, interval: I::Duration) -> bool {
    match since {
        None => true,
        Some(earlier) => now.duration_since(earlier).as_millis() >= interval.as_millis(),
    }
}
