//! Per-category percentage adjustments describing one scenario.
//!
//! An [`AdjustmentSet`] is a plain value: the caller owns it, changes it and hands a copy
//! to the engine for each recomputation. 100 % reproduces the baseline flux, 0 % removes
//! it entirely and values above 100 % scale it up (used for enhanced sinks).
//!
//! The set performs no clamping. Out-of-range values flow through the engine
//! arithmetically; bounding them is the job of whatever produced the values.

use crate::category::Category;
use crate::errors::{ThermoError, ThermoResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Percentage applied to a category's baseline when nothing else is specified.
pub const BASELINE_PERCENT: f64 = 100.0;

/// One complete scenario: a percentage multiplier for every category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, f64>", into = "BTreeMap<Category, f64>")]
pub struct AdjustmentSet {
    percents: [f64; Category::COUNT],
}

impl AdjustmentSet {
    /// Every category at 100 %.
    pub fn baseline() -> Self {
        Self {
            percents: [BASELINE_PERCENT; Category::COUNT],
        }
    }

    /// Every category set to `percent`.
    pub fn uniform(percent: f64) -> Self {
        Self {
            percents: [percent; Category::COUNT],
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.percents[category.index()]
    }

    pub fn set(&mut self, category: Category, percent: f64) {
        self.percents[category.index()] = percent;
    }

    /// Builder-style variant of [`AdjustmentSet::set`].
    pub fn with(mut self, category: Category, percent: f64) -> Self {
        self.set(category, percent);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Build a set from string keys, as received from an external payload.
    ///
    /// Unknown keys are rejected. Categories that are not mentioned stay at 100 %.
    pub fn from_pairs<'a, I>(pairs: I) -> ThermoResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut set = Self::baseline();
        for (key, percent) in pairs {
            set.set(key.parse()?, percent);
        }
        Ok(set)
    }

    /// Check that every percentage is finite.
    ///
    /// The engine never calls this; NaN and infinities propagate into its outputs.
    /// Callers that need strict results validate before computing.
    pub fn validate_finite(&self) -> ThermoResult<()> {
        match self.iter().find(|(_, v)| !v.is_finite()) {
            Some((category, value)) => Err(ThermoError::NonFiniteAdjustment {
                category: category.key().to_string(),
                value,
            }),
            None => Ok(()),
        }
    }
}

impl Default for AdjustmentSet {
    fn default() -> Self {
        Self::baseline()
    }
}

impl TryFrom<HashMap<String, f64>> for AdjustmentSet {
    type Error = ThermoError;

    fn try_from(map: HashMap<String, f64>) -> ThermoResult<Self> {
        Self::from_pairs(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}

impl From<BTreeMap<Category, f64>> for AdjustmentSet {
    fn from(map: BTreeMap<Category, f64>) -> Self {
        map.into_iter()
            .fold(Self::baseline(), |set, (c, v)| set.with(c, v))
    }
}

impl From<AdjustmentSet> for BTreeMap<Category, f64> {
    fn from(set: AdjustmentSet) -> Self {
        set.iter().collect()
    }
}
