//! When to ask the companion for a fresh temperature.
//!
//! The face refreshes the weather on minutes that are a multiple of the
//! refresh interval, which by default means at :00 and :30 of every hour.

/// Default refresh interval in minutes.
pub const DEFAULT_REFRESH_INTERVAL: u32 = 30;

/// Returns `true` when a weather refresh is due at `minute` with the default interval.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::schedule::should_fetch_weather;
///
/// assert!(should_fetch_weather(0));
/// assert!(should_fetch_weather(30));
/// assert!(!should_fetch_weather(15));
/// ```
pub fn should_fetch_weather(minute: u32) -> bool {
    FetchSchedule::default().is_due(minute)
}

/// Refresh policy keyed on the minute of the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSchedule {
    interval: u32,
}

impl FetchSchedule {
    /// Builds a schedule firing every `interval` minutes, aligned to the hour.
    ///
    /// Only divisors of 60 keep the refreshes evenly spaced across the hour
    /// boundary. Anything else falls back to [`DEFAULT_REFRESH_INTERVAL`].
    pub fn new(interval: u32) -> Self {
        if interval == 0 || 60 % interval != 0 {
            tracing::warn!(interval, fallback = DEFAULT_REFRESH_INTERVAL, "refresh interval does not divide an hour");
            return Self::default();
        }
        Self { interval }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn is_due(&self, minute: u32) -> bool {
        minute % self.interval == 0
    }
}

impl Default for FetchSchedule {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}
