//! Scenario-to-temperature projection
//!
//! Converts an [`AdjustmentSet`] into net emissions, a temperature trajectory and a
//! threshold classification. Every operation is a pure function of the parameters
//! and its arguments: no I/O, no interior state, no caching.
//!
//! # Modelling assumption
//!
//! Warming is taken to be proportional to cumulative emissions (TCRE). Cumulative
//! emissions over an interval are approximated as the scenario's *current* net
//! emission rate multiplied by the elapsed years, i.e. the rate is held constant for
//! the whole projection. This is not an integral over a changing emissions pathway.

use crate::adjustment::AdjustmentSet;
use crate::category::Category;
use crate::classification::{classify, Classification};
use crate::parameters::ModelParameters;
use crate::trajectory::{Trajectory, TrajectoryPoint};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flux of one category after applying its percentage adjustment.
///
/// No clamping is performed: negative or very large percentages scale the baseline
/// arithmetically and non-finite input yields non-finite output.
pub fn compute_category_flux(baseline: f64, adjustment_percent: f64) -> f64 {
    baseline * (adjustment_percent / 100.0)
}

/// Warming after `years_elapsed` years at a constant net emission rate.
///
/// ```text
/// T = current_warming + net_emissions * years_elapsed * tcre / 1000
/// ```
///
/// # Arguments
///
/// * `parameters` - Supplies `current_warming` (°C) and `tcre` (°C / 1000 Gt CO2)
/// * `net_emissions` - Net emission rate (Gt CO2e / yr), held constant
/// * `years_elapsed` - Years since the reference year
pub fn project_temperature(
    parameters: &ModelParameters,
    net_emissions: f64,
    years_elapsed: f64,
) -> f64 {
    parameters.current_warming + (net_emissions * years_elapsed) * parameters.tcre / 1000.0
}

/// Gross emissions, total removal and their difference for one scenario
/// unit: Gt CO2e / yr
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsBalance {
    pub gross_emissions: f64,
    pub total_removal: f64,
    pub net_emissions: f64,
}

/// Adjusted flux of every category, split into sources and sinks.
///
/// This is the snapshot sent to an advice service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxSnapshot {
    pub sources: BTreeMap<Category, f64>,
    pub sinks: BTreeMap<Category, f64>,
}

impl FluxSnapshot {
    pub fn get(&self, category: Category) -> f64 {
        let table = if category.is_source() {
            &self.sources
        } else {
            &self.sinks
        };
        table.get(&category).copied().unwrap_or(0.0)
    }
}

/// Everything the presentation layer needs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub gross_emissions: f64,
    pub total_removal: f64,
    pub net_emissions: f64,
    pub trajectory: Trajectory,
    pub classification: Classification,
}

impl ScenarioResult {
    /// Projected temperature at the last sample year.
    pub fn end_temperature(&self) -> f64 {
        self.trajectory.end_temperature().unwrap_or(f64::NAN)
    }

    pub fn balance(&self) -> EmissionsBalance {
        EmissionsBalance {
            gross_emissions: self.gross_emissions,
            total_removal: self.total_removal,
            net_emissions: self.net_emissions,
        }
    }
}

/// Stateless projection engine bound to a set of [`ModelParameters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionEngine {
    parameters: ModelParameters,
}

impl ProjectionEngine {
    /// Create an engine from parameters.
    ///
    /// The parameters are used as given; [`ModelParameters::validate`] is the caller's
    /// choice (loading from TOML always validates).
    pub fn from_parameters(parameters: ModelParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// Adjusted flux of a single category.
    pub fn category_flux(&self, adjustments: &AdjustmentSet, category: Category) -> f64 {
        compute_category_flux(
            self.parameters.baselines.get(category),
            adjustments.get(category),
        )
    }

    /// Adjusted flux of every category.
    pub fn category_fluxes(&self, adjustments: &AdjustmentSet) -> FluxSnapshot {
        let collect = |categories: &[Category]| -> BTreeMap<Category, f64> {
            categories
                .iter()
                .map(|c| (*c, self.category_flux(adjustments, *c)))
                .collect()
        };
        FluxSnapshot {
            sources: collect(&Category::SOURCES[..]),
            sinks: collect(&Category::SINKS[..]),
        }
    }

    /// Sum sources and sinks and take the difference.
    pub fn compute_net_emissions(&self, adjustments: &AdjustmentSet) -> EmissionsBalance {
        let gross_emissions: f64 = Category::SOURCES
            .iter()
            .map(|c| self.category_flux(adjustments, *c))
            .sum();
        let total_removal: f64 = Category::SINKS
            .iter()
            .map(|c| self.category_flux(adjustments, *c))
            .sum();

        EmissionsBalance {
            gross_emissions,
            total_removal,
            net_emissions: gross_emissions - total_removal,
        }
    }

    /// Warming after `years_elapsed` years at a constant `net_emissions` rate.
    pub fn project_temperature(&self, net_emissions: f64, years_elapsed: f64) -> f64 {
        project_temperature(&self.parameters, net_emissions, years_elapsed)
    }

    /// Evaluate the projection at every configured sample year.
    pub fn compute_trajectory(&self, net_emissions: f64) -> Trajectory {
        let reference_year = self.parameters.reference_year;
        let points = self
            .parameters
            .sample_years
            .iter()
            .map(|&year| TrajectoryPoint {
                year,
                temperature: self
                    .project_temperature(net_emissions, f64::from(year - reference_year)),
            })
            .collect();
        Trajectory::from_points(points)
    }

    /// Run the full projection for one scenario.
    pub fn compute_scenario(&self, adjustments: &AdjustmentSet) -> ScenarioResult {
        let balance = self.compute_net_emissions(adjustments);
        let trajectory = self.compute_trajectory(balance.net_emissions);
        let end_temperature = trajectory.end_temperature().unwrap_or(f64::NAN);
        let classification = classify(end_temperature);

        trace!(
            "net={} end_temperature={} classification={:?}",
            balance.net_emissions,
            end_temperature,
            classification
        );

        ScenarioResult {
            gross_emissions: balance.gross_emissions,
            total_removal: balance.total_removal,
            net_emissions: balance.net_emissions,
            trajectory,
            classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::BaselineTable;
    use is_close::is_close;

    fn default_engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    #[test]
    fn test_category_flux() {
        assert_eq!(compute_category_flux(10.0, 100.0), 10.0);
        assert_eq!(compute_category_flux(10.0, 0.0), 0.0);
        assert_eq!(compute_category_flux(10.0, 250.0), 25.0);
        assert_eq!(compute_category_flux(10.0, -50.0), -5.0);
        assert!(compute_category_flux(10.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_baseline_net_emissions() {
        let engine = default_engine();
        let balance = engine.compute_net_emissions(&AdjustmentSet::baseline());
        let baselines = BaselineTable::default();

        assert_eq!(balance.gross_emissions, baselines.sources_total());
        assert_eq!(balance.total_removal, baselines.sinks_total());
        assert_eq!(
            balance.net_emissions,
            baselines.sources_total() - baselines.sinks_total()
        );
        assert!(is_close!(balance.net_emissions, 33.51));
    }

    #[test]
    fn test_sources_only_off() {
        let engine = default_engine();
        let adjustments = Category::SOURCES
            .iter()
            .fold(AdjustmentSet::baseline(), |set, c| set.with(*c, 0.0));
        let balance = engine.compute_net_emissions(&adjustments);

        assert_eq!(balance.gross_emissions, 0.0);
        assert!(is_close!(balance.net_emissions, -5.65));
    }

    #[test]
    fn test_project_temperature_reference_year() {
        let engine = default_engine();
        assert_eq!(engine.project_temperature(33.51, 0.0), 1.1);
        assert_eq!(engine.project_temperature(-1000.0, 0.0), 1.1);
    }

    #[test]
    fn test_project_temperature_horizon() {
        let engine = default_engine();
        let t = engine.project_temperature(33.51, 76.0);
        assert!(is_close!(t, 1.1 + 33.51 * 76.0 * 0.45 / 1000.0));
    }

    #[test]
    fn test_project_temperature_is_constant_rate() {
        // Doubling the elapsed time doubles the warming increment
        let engine = default_engine();
        let d1 = engine.project_temperature(20.0, 10.0) - 1.1;
        let d2 = engine.project_temperature(20.0, 20.0) - 1.1;
        assert!(is_close!(d2, 2.0 * d1));
    }

    #[test]
    fn test_trajectory_matches_sample_years() {
        let engine = default_engine();
        let trajectory = engine.compute_trajectory(10.0);
        assert_eq!(trajectory.years(), engine.parameters().sample_years);
        assert_eq!(trajectory.points()[0].temperature, 1.1);
    }

    #[test]
    fn test_trajectory_custom_sample_years() {
        let engine = ProjectionEngine::from_parameters(ModelParameters {
            sample_years: vec![2024, 2025, 2100],
            ..Default::default()
        });
        let trajectory = engine.compute_trajectory(1000.0);
        assert_eq!(trajectory.years(), vec![2024, 2025, 2100]);
        assert!(is_close!(trajectory.points()[1].temperature, 1.1 + 0.45));
    }

    #[test]
    fn test_default_scenario_is_dangerous() {
        let result = default_engine().compute_scenario(&AdjustmentSet::baseline());
        assert!(is_close!(result.net_emissions, 33.51));
        assert!((result.end_temperature() - 2.246).abs() < 1e-3);
        assert_eq!(result.classification, Classification::Dangerous);
    }

    #[test]
    fn test_max_green_scenario_is_safe() {
        let adjustments = Category::ALL.iter().fold(AdjustmentSet::baseline(), |set, c| {
            set.with(*c, if c.is_source() { 0.0 } else { 500.0 })
        });
        let result = default_engine().compute_scenario(&adjustments);
        assert!(result.net_emissions < 0.0);
        assert!(result.end_temperature() < 1.1);
        assert_eq!(result.classification, Classification::Safe);
    }

    #[test]
    fn test_nan_propagates() {
        let adjustments = AdjustmentSet::baseline().with(Category::Energy, f64::NAN);
        let result = default_engine().compute_scenario(&adjustments);
        assert!(result.net_emissions.is_nan());
        assert!(result.end_temperature().is_nan());
        // NaN * 0 is still NaN, so even the reference year is affected
        assert!(result.trajectory.points()[0].temperature.is_nan());
        assert_eq!(result.classification, Classification::Dangerous);
    }

    #[test]
    fn test_flux_snapshot() {
        let engine = default_engine();
        let adjustments = AdjustmentSet::baseline()
            .with(Category::Energy, 50.0)
            .with(Category::Forest, 200.0);
        let snapshot = engine.category_fluxes(&adjustments);

        assert_eq!(snapshot.sources.len(), 6);
        assert_eq!(snapshot.sinks.len(), 4);
        assert!(is_close!(snapshot.get(Category::Energy), 7.915));
        assert!(is_close!(snapshot.get(Category::Forest), 6.2));
    }

    #[test]
    fn test_serialization() {
        let engine = ProjectionEngine::from_parameters(ModelParameters {
            tcre: 0.6,
            ..Default::default()
        });
        let json = serde_json::to_string(&engine).expect("Serialization failed");
        let parsed: ProjectionEngine = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(engine, parsed);
    }
}
