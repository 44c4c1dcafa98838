//! Slider bounds for the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thermocity_core::category::Category;
use thermocity_core::errors::{ThermoError, ThermoResult};

/// Default maximum for sink sliders, allowing enhanced removal well above baseline.
pub const DEFAULT_SINK_MAX: f64 = 500.0;

/// Maximum for source sliders.
pub const SOURCE_MAX: f64 = 100.0;

/// Upper bound of each category's slider. The lower bound is always 0 %.
///
/// Serialises as a map from category key to maximum; categories left out keep their
/// default bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, f64>", into = "BTreeMap<Category, f64>")]
pub struct SliderLimits {
    max: [f64; Category::COUNT],
}

impl SliderLimits {
    pub fn default_max(category: Category) -> f64 {
        if category.is_source() {
            SOURCE_MAX
        } else {
            DEFAULT_SINK_MAX
        }
    }

    pub fn max(&self, category: Category) -> f64 {
        self.max[category.index()]
    }

    pub fn with_max(mut self, category: Category, max: f64) -> Self {
        self.max[category.index()] = max;
        self
    }

    /// Bound a percentage into `[0, max]` for the category.
    ///
    /// NaN stays NaN, so invalid input is still visible downstream.
    pub fn clamp(&self, category: Category, percent: f64) -> f64 {
        if percent.is_nan() {
            return percent;
        }
        percent.max(0.0).min(self.max(category))
    }

    /// Check every maximum is finite and not negative.
    pub fn validate(&self) -> ThermoResult<()> {
        match Category::ALL
            .into_iter()
            .find(|c| !(self.max(*c).is_finite() && self.max(*c) >= 0.0))
        {
            Some(category) => Err(ThermoError::InvalidParameters(format!(
                "slider maximum for '{}' must be finite and non-negative, got {}",
                category,
                self.max(category)
            ))),
            None => Ok(()),
        }
    }
}

impl Default for SliderLimits {
    fn default() -> Self {
        Self {
            max: Category::ALL.map(Self::default_max),
        }
    }
}

impl From<BTreeMap<Category, f64>> for SliderLimits {
    fn from(map: BTreeMap<Category, f64>) -> Self {
        map.into_iter()
            .fold(Self::default(), |limits, (c, v)| limits.with_max(c, v))
    }
}

impl From<SliderLimits> for BTreeMap<Category, f64> {
    fn from(limits: SliderLimits) -> Self {
        Category::ALL.iter().map(|c| (*c, limits.max(*c))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = SliderLimits::default();
        assert_eq!(limits.max(Category::Energy), 100.0);
        assert_eq!(limits.max(Category::Dac), 500.0);
    }

    #[test]
    fn test_clamp() {
        let limits = SliderLimits::default().with_max(Category::Forest, 400.0);
        assert_eq!(limits.clamp(Category::Energy, 150.0), 100.0);
        assert_eq!(limits.clamp(Category::Energy, -10.0), 0.0);
        assert_eq!(limits.clamp(Category::Forest, 450.0), 400.0);
        assert_eq!(limits.clamp(Category::Ocean, 450.0), 450.0);
    }

    #[test]
    fn test_clamp_nan_passes_through() {
        assert!(SliderLimits::default()
            .clamp(Category::Ccs, f64::NAN)
            .is_nan());
    }

    #[test]
    fn test_default_is_valid() {
        SliderLimits::default().validate().unwrap();
    }

    #[test]
    fn test_negative_max_rejected() {
        let limits = SliderLimits::default().with_max(Category::Forest, -50.0);
        let err = limits.validate().unwrap_err();
        assert!(matches!(err, ThermoError::InvalidParameters(ref m) if m.contains("forest")));
    }

    #[test]
    fn test_non_finite_max_rejected() {
        let limits = SliderLimits::default().with_max(Category::Ocean, f64::INFINITY);
        assert!(limits.validate().is_err());
        let limits = SliderLimits::default().with_max(Category::Dac, f64::NAN);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let limits: SliderLimits = serde_json::from_str(r#"{"dac": 10000.0}"#).unwrap();
        assert_eq!(limits.max(Category::Dac), 10000.0);
        assert_eq!(limits.max(Category::Forest), 500.0);
    }
}
