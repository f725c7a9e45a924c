use chrono::Month;
use serde::{Deserialize, Serialize};

/// A single monthly reading from the global temperature payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1-based (1 = January)
    pub month: u32,
    /// Deviation in °C from the dataset's base temperature
    pub variance: f64,
}

impl Observation {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Observation {
            year,
            month,
            variance,
        }
    }

    /// Zero-based month, as published in the `data-month` attribute.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Full English month name, e.g. "January".
    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }

    /// Absolute temperature of this reading.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Resolve a 1-based month number to its full name.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_month_index_and_temperature() {
        let obs = Observation::new(1753, 3, -1.25);
        assert_eq!(obs.month_index(), 2);
        assert_eq!(obs.month_name(), Some("March"));
        assert!((obs.temperature(8.66) - 7.41).abs() < 1e-9);
    }
}
