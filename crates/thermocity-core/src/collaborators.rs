//! Interfaces to optional external services.
//!
//! Advice, forecasting and activity logging live outside the projection model. They
//! are injected as trait objects so the engine and the scenario session can run, and
//! be tested, without any of them. A failing collaborator never affects the
//! projection itself.

use crate::engine::FluxSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Service is offline")]
    Offline,
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// A single suggested policy action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub sector: String,
    pub action: String,
    pub impact: String,
    pub suggestion: String,
}

/// Free-text advice for the current scenario. Opaque to the projection model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub gap_status: String,
    pub target_equilibrium: String,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "ai_summary")]
    pub summary: String,
}

/// Produces policy advice from a snapshot of adjusted category fluxes.
pub trait Advisor {
    fn advise(&self, fluxes: &FluxSnapshot) -> Result<Advice, ServiceError>;
}

/// One entry of the persisted activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedResult {
    /// unit: kg CO2e
    pub co2e: f64,
    pub timestamp: DateTime<Utc>,
}

/// Direction of the emissions trend reported by a forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Change in logged emissions per logging cycle.
    pub velocity: f64,
    pub projection_2030: f64,
    pub projection_2050: f64,
    pub confidence: String,
}

impl Forecast {
    /// Negative velocity means emissions are falling.
    pub fn trend(&self) -> Trend {
        if self.velocity < 0.0 {
            Trend::Improving
        } else if self.velocity > 0.0 {
            Trend::Worsening
        } else {
            Trend::Flat
        }
    }
}

/// Extrapolates a trend from the current net emissions and recent logged results.
pub trait Forecaster {
    fn forecast(
        &self,
        current_net_emissions: f64,
        history: &[LoggedResult],
    ) -> Result<Forecast, ServiceError>;
}

/// A single household activity, e.g. 120 km driven in a petrol car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub category: String,
    #[serde(rename = "type")]
    pub subtype: String,
    #[serde(rename = "value")]
    pub magnitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityImpact {
    pub co2e: f64,
    pub unit: String,
}

/// Converts a logged activity to a CO2-equivalent amount.
pub trait ActivityLogger {
    fn log_activity(&self, activity: &Activity) -> Result<ActivityImpact, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(velocity: f64) -> Forecast {
        Forecast {
            velocity,
            projection_2030: 0.0,
            projection_2050: 0.0,
            confidence: "Medium".to_string(),
        }
    }

    #[test]
    fn test_trend_from_velocity_sign() {
        assert_eq!(forecast(-2.0).trend(), Trend::Improving);
        assert_eq!(forecast(0.5).trend(), Trend::Worsening);
        assert_eq!(forecast(0.0).trend(), Trend::Flat);
    }

    #[test]
    fn test_activity_wire_names() {
        let activity: Activity =
            serde_json::from_str(r#"{"category": "energy", "type": "coal", "value": 2.0}"#)
                .unwrap();
        assert_eq!(activity.subtype, "coal");
        assert_eq!(activity.magnitude, 2.0);
    }

    #[test]
    fn test_advice_wire_names() {
        let advice: Advice = serde_json::from_str(
            r#"{"gap_status": "Critical", "target_equilibrium": "1.5°C",
                "recommendations": [], "ai_summary": "Cut emissions"}"#,
        )
        .unwrap();
        assert_eq!(advice.summary, "Cut emissions");
    }

    #[test]
    fn test_logged_result_timestamp() {
        let entry: LoggedResult =
            serde_json::from_str(r#"{"co2e": 40.0, "timestamp": "2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
