//! Temperature line of the watch face.
//!
//! The watch only ever sees whole degrees Celsius. The companion is the one
//! that converts raw readings, so the rounding rule lives here too and both
//! sides agree on it.

/// Absolute zero offset between Kelvin and Celsius.
const KELVIN_OFFSET: f64 = 273.15;

/// Formats a whole-degree temperature, e.g. `21°C` or `-5°C`.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::temperature::temperature_text;
///
/// assert_eq!(temperature_text(21), "21°C");
/// assert_eq!(temperature_text(-5), "-5°C");
/// ```
pub fn temperature_text(celsius: i32) -> String {
    format!("{}°C", celsius)
}

/// Rounds a Celsius reading to whole degrees, halves going up (`-0.5` gives 0).
pub fn round_celsius(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

/// Converts a Kelvin reading to whole degrees Celsius.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::temperature::kelvin_to_celsius;
///
/// assert_eq!(kelvin_to_celsius(294.15), 21);
/// assert_eq!(kelvin_to_celsius(273.15), 0);
/// assert_eq!(kelvin_to_celsius(268.0), -5);
/// ```
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    round_celsius(kelvin - KELVIN_OFFSET)
}
