//! Unit formatting helpers for readouts and speed marker labels.
//!
//! All quantities are stored internally in base units: speeds in metres per
//! second, temperatures in degrees Celsius, times in seconds, distances in
//! metres. Formatting converts for display only.

use serde::{Deserialize, Serialize};

/// Display unit for temperature readouts.
///
/// Temperatures are always tracked in Celsius internally; Fahrenheit is a
/// presentation choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix used in labels.
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

/// Convert degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Format a temperature stored in Celsius for display in the given unit.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    let value = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    };
    format!("{:.0}{}", value, unit.suffix())
}

/// Format a movement speed in metres per second.
pub fn format_speed(speed_mps: f64) -> String {
    format!("{:.2} m/s", speed_mps)
}

/// Format a footstep tempo in beats per minute.
pub fn format_bpm(bpm: f64) -> String {
    format!("{:.1} bpm", bpm)
}

/// Format a duration in whole seconds.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.0}s", seconds)
}

/// Format a duration in whole minutes.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.0}m", minutes)
}

/// Format a distance in metres.
pub fn format_meters(meters: f64) -> String {
    format!("{:.1}m", meters)
}

/// Format a fraction in `[0, 1]` as a whole percentage.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(15.0, TemperatureUnit::Celsius), "15°C");
        assert_eq!(format_temperature(15.0, TemperatureUnit::Fahrenheit), "59°F");
        assert_eq!(format_temperature(-3.0, TemperatureUnit::Celsius), "-3°C");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(1.7), "1.70 m/s");
        assert_eq!(format_speed(2.805), "2.81 m/s");
    }

    #[test]
    fn test_format_bpm() {
        assert_eq!(format_bpm(115.02), "115.0 bpm");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_durations_and_distance() {
        assert_eq!(format_seconds(90.0), "90s");
        assert_eq!(format_minutes(3.0), "3m");
        assert_eq!(format_meters(2.5), "2.5m");
    }
}
