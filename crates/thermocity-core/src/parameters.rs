//! Projection model parameters
//!
//! Fixed per deployment. Parameters can be loaded from TOML; any field left out of the
//! file keeps its default value.

use crate::baseline::BaselineTable;
use crate::errors::{ThermoError, ThermoResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for the linear cumulative-emissions temperature model.
///
/// Temperature at a sample year is
///
/// ```text
/// T(year) = current_warming + net_emissions * (year - reference_year) * tcre / 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    /// Transient climate response to cumulative emissions.
    ///
    /// unit: °C per 1000 Gt CO2
    ///
    /// Default: 0.45 (IPCC AR6 best estimate)
    pub tcre: f64,

    /// Observed warming above pre-industrial at the reference year.
    ///
    /// unit: °C
    ///
    /// Default: 1.1
    pub current_warming: f64,

    /// Year at which `current_warming` applies.
    ///
    /// Default: 2024
    pub reference_year: i32,

    /// Last year of the projection.
    ///
    /// Default: 2100
    pub horizon_year: i32,

    /// Years at which the trajectory is evaluated, in ascending order.
    ///
    /// Default: 2024, 2030, 2040, ..., 2100
    pub sample_years: Vec<i32>,

    /// Baseline flux per category.
    pub baselines: BaselineTable,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            tcre: 0.45,
            current_warming: 1.1,
            reference_year: 2024,
            horizon_year: 2100,
            sample_years: vec![2024, 2030, 2040, 2050, 2060, 2070, 2080, 2090, 2100],
            baselines: BaselineTable::default(),
        }
    }
}

impl ModelParameters {
    /// Parse and validate parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> ThermoResult<Self> {
        let parameters: Self = toml::from_str(s)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Read, parse and validate parameters from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThermoResult<Self> {
        let path = path.as_ref();
        debug!("Loading model parameters from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> ThermoResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Years between the reference year and the horizon.
    pub fn years_span(&self) -> i32 {
        self.horizon_year - self.reference_year
    }

    /// Check the parameters describe a usable projection.
    pub fn validate(&self) -> ThermoResult<()> {
        if !self.tcre.is_finite() {
            return Err(invalid(format!("tcre must be finite, got {}", self.tcre)));
        }
        if !self.current_warming.is_finite() {
            return Err(invalid(format!(
                "current_warming must be finite, got {}",
                self.current_warming
            )));
        }
        if self.horizon_year < self.reference_year {
            return Err(invalid(format!(
                "horizon_year {} is before reference_year {}",
                self.horizon_year, self.reference_year
            )));
        }
        if self.sample_years.is_empty() {
            return Err(invalid("sample_years must not be empty".to_string()));
        }
        if let Some(w) = self.sample_years.windows(2).find(|w| w[0] >= w[1]) {
            return Err(invalid(format!(
                "sample_years must be strictly ascending, found {} followed by {}",
                w[0], w[1]
            )));
        }
        if let Some(year) = self
            .sample_years
            .iter()
            .find(|y| **y < self.reference_year || **y > self.horizon_year)
        {
            return Err(invalid(format!(
                "sample year {} is outside {}..={}",
                year, self.reference_year, self.horizon_year
            )));
        }
        if let Some((category, value)) = self.baselines.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!(
                "baseline for '{}' must be finite, got {}",
                category, value
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ThermoError {
    ThermoError::InvalidParameters(message)
}
