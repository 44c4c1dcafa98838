//! Emission source and removal sink categories.
//!
//! The set of categories is fixed. Sources add to gross emissions while sinks remove CO2
//! from the atmosphere. Every table in the crate (baselines, adjustments, slider limits)
//! is keyed by [`Category`].
//!
//! Categories serialise as their lower-case key (`"energy"`, `"dac"`, ...).

use crate::errors::{ThermoError, ThermoResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a category emits or removes CO2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Source,
    Sink,
}

/// A single emission source or removal sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Energy,
    Transport,
    Industry,
    Buildings,
    Agriculture,
    Waste,
    Forest,
    Ocean,
    Ccs,
    Dac,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Source categories in display order.
    pub const SOURCES: [Category; 6] = [
        Category::Energy,
        Category::Transport,
        Category::Industry,
        Category::Buildings,
        Category::Agriculture,
        Category::Waste,
    ];

    /// Sink categories in display order.
    pub const SINKS: [Category; 4] = [
        Category::Forest,
        Category::Ocean,
        Category::Ccs,
        Category::Dac,
    ];

    /// All categories, sources first.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Energy,
        Category::Transport,
        Category::Industry,
        Category::Buildings,
        Category::Agriculture,
        Category::Waste,
        Category::Forest,
        Category::Ocean,
        Category::Ccs,
        Category::Dac,
    ];

    pub fn kind(self) -> CategoryKind {
        match self {
            Category::Forest | Category::Ocean | Category::Ccs | Category::Dac => {
                CategoryKind::Sink
            }
            _ => CategoryKind::Source,
        }
    }

    pub fn is_source(self) -> bool {
        self.kind() == CategoryKind::Source
    }

    pub fn is_sink(self) -> bool {
        self.kind() == CategoryKind::Sink
    }

    /// Lower-case key used in configuration files and external payloads.
    pub fn key(self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Transport => "transport",
            Category::Industry => "industry",
            Category::Buildings => "buildings",
            Category::Agriculture => "agriculture",
            Category::Waste => "waste",
            Category::Forest => "forest",
            Category::Ocean => "ocean",
            Category::Ccs => "ccs",
            Category::Dac => "dac",
        }
    }

    /// Human-readable name for readouts.
    pub fn label(self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Transport => "Transport",
            Category::Industry => "Industry",
            Category::Buildings => "Buildings",
            Category::Agriculture => "Agriculture",
            Category::Waste => "Waste",
            Category::Forest => "Forests",
            Category::Ocean => "Ocean",
            Category::Ccs => "Carbon Capture & Storage",
            Category::Dac => "Direct Air Capture",
        }
    }

    /// Position of the category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ThermoError;

    fn from_str(s: &str) -> ThermoResult<Self> {
        let key = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| ThermoError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sources_then_sinks() {
        let joined: Vec<Category> = Category::SOURCES
            .iter()
            .chain(Category::SINKS.iter())
            .copied()
            .collect();
        assert_eq!(joined, Category::ALL.to_vec());
    }

    #[test]
    fn test_index_matches_position() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_kind() {
        assert!(Category::SOURCES.iter().all(|c| c.is_source()));
        assert!(Category::SINKS.iter().all(|c| c.is_sink()));
    }

    #[test]
    fn test_parse_keys() {
        for c in Category::ALL {
            assert_eq!(c.key().parse::<Category>().unwrap(), c);
        }
        assert_eq!(" DAC ".parse::<Category>().unwrap(), Category::Dac);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "aviation".parse::<Category>().unwrap_err();
        assert!(matches!(err, ThermoError::UnknownCategory(ref k) if k == "aviation"));
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Category::Ccs).unwrap();
        assert_eq!(json, "\"ccs\"");
        let parsed: Category = serde_json::from_str("\"buildings\"").unwrap();
        assert_eq!(parsed, Category::Buildings);
    }
}
