//! Baseline annual fluxes per category.
//!
//! Values are in Gt CO2e / yr and approximate the IPCC AR6 WGIII (2022) sectoral
//! breakdown. Sources are gross emissions, sinks are gross removals (both positive).

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Baseline flux for every category.
///
/// Serialises as a map from category key to value. Keys missing from a configuration
/// file keep their default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, f64>", into = "BTreeMap<Category, f64>")]
pub struct BaselineTable {
    values: [f64; Category::COUNT],
}

impl BaselineTable {
    /// Default baseline for a single category
    /// unit: Gt CO2e / yr
    pub fn default_value(category: Category) -> f64 {
        match category {
            Category::Energy => 15.83,
            Category::Transport => 7.26,
            Category::Industry => 5.89,
            Category::Buildings => 2.94,
            Category::Agriculture => 5.66,
            Category::Waste => 1.58,
            Category::Forest => 3.1,
            Category::Ocean => 2.5,
            Category::Ccs => 0.04,
            Category::Dac => 0.01,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    /// Return a copy with one baseline replaced.
    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.values[category.index()] = value;
        self
    }

    /// Sum of all source baselines.
    pub fn sources_total(&self) -> f64 {
        Category::SOURCES.iter().map(|c| self.get(*c)).sum()
    }

    /// Sum of all sink baselines.
    pub fn sinks_total(&self) -> f64 {
        Category::SINKS.iter().map(|c| self.get(*c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self {
            values: Category::ALL.map(Self::default_value),
        }
    }
}

impl From<BTreeMap<Category, f64>> for BaselineTable {
    fn from(map: BTreeMap<Category, f64>) -> Self {
        map.into_iter()
            .fold(Self::default(), |table, (c, v)| table.with(c, v))
    }
}

impl From<BaselineTable> for BTreeMap<Category, f64> {
    fn from(table: BaselineTable) -> Self {
        table.iter().collect()
    }
}
