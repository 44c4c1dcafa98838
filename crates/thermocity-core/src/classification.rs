//! Paris Agreement threshold classification of end-of-horizon warming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the [`Classification::Safe`] band (°C, inclusive).
pub const SAFE_LIMIT: f64 = 1.5;

/// Upper bound of the [`Classification::Warning`] band (°C, inclusive).
pub const PARIS_LIMIT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// At or below 1.5 °C
    Safe,
    /// Above 1.5 °C, at or below 2.0 °C
    Warning,
    /// Above 2.0 °C, or not a number
    Dangerous,
}

impl Classification {
    /// Status text shown next to the temperature readout.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Safe => "Safe (1.5°C Goal)",
            Classification::Warning => "Warning (Paris Limit)",
            Classification::Dangerous => "Dangerous level",
        }
    }

    /// Whether the 2.0 °C Paris limit is respected.
    pub fn is_within_paris(self) -> bool {
        self != Classification::Dangerous
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an end-of-horizon temperature against the policy thresholds.
///
/// Both bounds are inclusive. A NaN temperature fails both comparisons and
/// is classified as [`Classification::Dangerous`].
pub fn classify(temperature: f64) -> Classification {
    if temperature <= SAFE_LIMIT {
        Classification::Safe
    } else if temperature <= PARIS_LIMIT {
        Classification::Warning
    } else {
        Classification::Dangerous
    }
}
