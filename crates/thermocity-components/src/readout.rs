//! Text readouts for a computed scenario.
//!
//! All rounding for display happens here. The engine's numbers are never rounded.

use serde::Serialize;
use thermocity_core::category::Category;
use thermocity_core::classification::Classification;
use thermocity_core::collaborators::{Forecast, Trend};
use thermocity_core::engine::{FluxSnapshot, ScenarioResult};

/// One category's flux as displayed next to its slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReadout {
    pub category: Category,
    pub label: &'static str,
    pub flux: String,
}

/// Formatted view of a [`ScenarioResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readouts {
    pub categories: Vec<CategoryReadout>,
    pub gross_emissions: String,
    pub total_removal: String,
    pub net_emissions: String,
    pub temperature_change: String,
    pub classification: Classification,
    pub status: &'static str,
}

impl Readouts {
    pub fn from_result(result: &ScenarioResult, fluxes: &FluxSnapshot) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| CategoryReadout {
                category: *c,
                label: c.label(),
                flux: format_flux(*c, fluxes.get(*c)),
            })
            .collect();

        Self {
            categories,
            gross_emissions: format!("{:.1}", result.gross_emissions),
            total_removal: format!("{:.1}", result.total_removal),
            net_emissions: format!("{:.1}", result.net_emissions),
            temperature_change: format_temperature(result.end_temperature()),
            classification: result.classification,
            status: result.classification.label(),
        }
    }
}

/// Source fluxes show one decimal, sink removals two decimals with a minus sign.
pub fn format_flux(category: Category, flux: f64) -> String {
    if category.is_source() {
        format!("{:.1} Gt", flux)
    } else {
        format!("\u{2212}{:.2} Gt", flux)
    }
}

/// Signed temperature change with two decimals, e.g. `+2.25`.
pub fn format_temperature(temperature: f64) -> String {
    if temperature >= 0.0 {
        format!("+{:.2}", temperature)
    } else {
        format!("{:.2}", temperature)
    }
}

/// Message describing a forecast trend, if the trend is not flat.
pub fn trend_message(forecast: &Forecast) -> Option<String> {
    match forecast.trend() {
        Trend::Improving => Some(format!(
            "AI Trend: Emissions dropping by {} Gt per cycle.",
            forecast.velocity.abs()
        )),
        Trend::Worsening => {
            Some("AI Trend: Emissions rising. Urgent policy action needed!".to_string())
        }
        Trend::Flat => None,
    }
}
