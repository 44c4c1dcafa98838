//! Household activity logging using fixed emission factors.
//!
//! Factors are in kg CO2e per unit of activity and approximate IEA / IPCC values.
//! The unit depends on the activity (kWh, m^3, litre, kg or km).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thermocity_core::collaborators::{Activity, ActivityImpact, ActivityLogger, ServiceError};

/// Unit reported for every activity impact.
pub const IMPACT_UNIT: &str = "kg CO2e";

const INVALID_ACTIVITY: &str = "Invalid category or activity type";

/// Emission factors grouped by activity category, then subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactorTable {
    factors: BTreeMap<String, BTreeMap<String, f64>>,
}

impl EmissionFactorTable {
    pub fn empty() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }

    pub fn with_factor(mut self, category: &str, subtype: &str, factor: f64) -> Self {
        self.factors
            .entry(category.to_string())
            .or_default()
            .insert(subtype.to_string(), factor);
        self
    }

    /// Factor for a subtype, if both category and subtype are known.
    pub fn factor(&self, category: &str, subtype: &str) -> Option<f64> {
        self.factors.get(category)?.get(subtype).copied()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.factors.keys().map(String::as_str).collect()
    }

    /// Subtypes offered for a category, in alphabetical order.
    pub fn subtypes(&self, category: &str) -> Vec<&str> {
        self.factors
            .get(category)
            .map(|s| s.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::empty()
            // kg per kWh, m^3, litre, kg
            .with_factor("energy", "electricity", 0.475)
            .with_factor("energy", "natural_gas", 1.93)
            .with_factor("energy", "heating_oil", 2.68)
            .with_factor("energy", "coal", 2.42)
            // kg per km
            .with_factor("transportation", "petrol_car", 0.17)
            .with_factor("transportation", "diesel_car", 0.171)
            .with_factor("transportation", "electric_car", 0.05)
            .with_factor("transportation", "flight_short", 0.15)
            .with_factor("transportation", "flight_long", 0.11)
            .with_factor("transportation", "bus", 0.089)
            .with_factor("transportation", "train", 0.035)
            // kg per kg
            .with_factor("waste", "general_waste", 0.45)
            .with_factor("waste", "recycling", 0.021)
            .with_factor("waste", "compost", 0.10)
    }
}

/// In-process [`ActivityLogger`] backed by an [`EmissionFactorTable`].
#[derive(Debug, Clone, Default)]
pub struct FactorActivityLogger {
    factors: EmissionFactorTable,
}

impl FactorActivityLogger {
    pub fn new(factors: EmissionFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }
}

impl ActivityLogger for FactorActivityLogger {
    fn log_activity(&self, activity: &Activity) -> Result<ActivityImpact, ServiceError> {
        if !activity.magnitude.is_finite() {
            return Err(ServiceError::Rejected(format!(
                "Activity value must be finite, got {}",
                activity.magnitude
            )));
        }
        // A zero factor is treated as unknown
        let factor = self
            .factors
            .factor(&activity.category, &activity.subtype)
            .filter(|f| *f != 0.0)
            .ok_or_else(|| ServiceError::Rejected(INVALID_ACTIVITY.to_string()))?;

        Ok(ActivityImpact {
            co2e: round_to(activity.magnitude * factor, 2),
            unit: IMPACT_UNIT.to_string(),
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Practical tips for reducing a household's footprint in a sector.
pub fn household_tips(sector: &str) -> Vec<&'static str> {
    match sector.trim().to_ascii_lowercase().as_str() {
        "energy" => vec![
            "Switch to LED bulbs to reduce electricity consumption by up to 80%.",
            "Install a programmable thermostat to optimize heating and cooling.",
            "Consider installing solar panels to generate renewable energy.",
            "Improve home insulation to reduce heating and cooling loss.",
        ],
        "transportation" => vec![
            "Use public transport, bike, or walk for short trips.",
            "Consider switching to an electric vehicle for your next car.",
            "Practice eco-driving techniques (smooth acceleration, steady speed).",
            "Reduce air travel by choosing local vacation spots or using video calls.",
        ],
        "waste" => vec![
            "Compost organic waste to reduce methane emissions from landfills.",
            "Maximize recycling of paper, plastic, and metal.",
            "Avoid single-use plastics and opt for reusable alternatives.",
            "Reduce food waste through better meal planning.",
        ],
        _ => vec!["No specific recommendations for this sector."],
    }
}
