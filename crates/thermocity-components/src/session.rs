//! Presentation-layer scenario state with one-way data flow.
//!
//! The session owns the current [`AdjustmentSet`]. Every change produces a fresh
//! [`ScenarioView`] computed from scratch by the engine, which a renderer consumes.
//! Nothing is mutated in place downstream of the adjustments.
//!
//! Collaborator calls are separate from recomputation. Their failures are turned into
//! user-facing notices and never affect the projection.

use crate::history::ResultHistory;
use crate::limits::SliderLimits;
use crate::readout::{trend_message, Readouts};
use crate::throttle::Throttle;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;
use thermocity_core::adjustment::AdjustmentSet;
use thermocity_core::category::Category;
use thermocity_core::collaborators::{
    Activity, ActivityImpact, ActivityLogger, Advice, Advisor, Forecast, Forecaster, LoggedResult,
};
use thermocity_core::engine::{FluxSnapshot, ProjectionEngine, ScenarioResult};

/// Shown when the advice service cannot be reached.
pub const ADVISOR_OFFLINE_NOTICE: &str = "AI Assistant offline. Ensure backend is running.";

/// Shown when the activity logging service cannot be reached.
pub const LOGGER_OFFLINE_NOTICE: &str = "API Connection failed. Ensure backend is running.";

/// Shown when the forecast service fails.
pub const FORECAST_OFFLINE_NOTICE: &str = "Forecasting unavailable.";

/// Minimum number of logged results before a forecast is requested.
pub const MIN_FORECAST_HISTORY: usize = 2;

/// Everything needed to render one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioView {
    pub adjustments: AdjustmentSet,
    pub fluxes: FluxSnapshot,
    pub result: ScenarioResult,
    pub readouts: Readouts,
}

/// Outcome of asking the advisor for recommendations.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorPanel {
    Advice(Advice),
    Offline(&'static str),
}

/// Outcome of a forecast request.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// A request was made less than one throttle window ago.
    Throttled,
    /// Fewer than [`MIN_FORECAST_HISTORY`] logged results.
    InsufficientHistory,
    Trend {
        forecast: Forecast,
        message: Option<String>,
    },
    Offline(&'static str),
}

/// Outcome of logging a household activity.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityOutcome {
    Logged {
        impact: ActivityImpact,
        message: String,
    },
    Failed(&'static str),
}

#[derive(Debug, Clone)]
pub struct ScenarioSession {
    engine: ProjectionEngine,
    limits: SliderLimits,
    adjustments: AdjustmentSet,
    forecast_throttle: Throttle,
}

impl ScenarioSession {
    pub fn new(engine: ProjectionEngine, limits: SliderLimits) -> Self {
        Self {
            engine,
            limits,
            adjustments: AdjustmentSet::baseline(),
            forecast_throttle: Throttle::default(),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn limits(&self) -> &SliderLimits {
        &self.limits
    }

    /// Current adjustments, by value.
    pub fn adjustments(&self) -> AdjustmentSet {
        self.adjustments
    }

    /// Move one slider. The value is clamped to the slider's range.
    pub fn set_adjustment(&mut self, category: Category, percent: f64) -> ScenarioView {
        let clamped = self.limits.clamp(category, percent);
        if !percent.is_nan() && clamped != percent {
            debug!("Clamped {} from {} to {}", category, percent, clamped);
        }
        self.adjustments.set(category, clamped);
        self.view()
    }

    /// Replace every slider at once, clamping each value.
    pub fn apply(&mut self, adjustments: AdjustmentSet) -> ScenarioView {
        for (category, percent) in adjustments.iter() {
            self.adjustments
                .set(category, self.limits.clamp(category, percent));
        }
        self.view()
    }

    /// All sliders back to 100 %.
    pub fn reset(&mut self) -> ScenarioView {
        self.adjustments = AdjustmentSet::baseline();
        self.view()
    }

    /// Sources to 0 %, sinks to their maximum.
    pub fn max_green(&mut self) -> ScenarioView {
        for category in Category::SOURCES {
            self.adjustments.set(category, 0.0);
        }
        for category in Category::SINKS {
            self.adjustments.set(category, self.limits.max(category));
        }
        self.view()
    }

    pub fn result(&self) -> ScenarioResult {
        self.engine.compute_scenario(&self.adjustments)
    }

    pub fn fluxes(&self) -> FluxSnapshot {
        self.engine.category_fluxes(&self.adjustments)
    }

    /// Recompute everything for the current adjustments.
    pub fn view(&self) -> ScenarioView {
        let result = self.result();
        let fluxes = self.fluxes();
        let readouts = Readouts::from_result(&result, &fluxes);
        ScenarioView {
            adjustments: self.adjustments,
            fluxes,
            result,
            readouts,
        }
    }

    /// Ask the advisor about the current fluxes.
    pub fn request_advice(&self, advisor: &dyn Advisor) -> AdvisorPanel {
        match advisor.advise(&self.fluxes()) {
            Ok(advice) => AdvisorPanel::Advice(advice),
            Err(e) => {
                warn!("Advisor unavailable: {}", e);
                AdvisorPanel::Offline(ADVISOR_OFFLINE_NOTICE)
            }
        }
    }

    /// Ask the forecaster for a trend, at most once per throttle window.
    ///
    /// The throttle window opens before the history check, so a request skipped for
    /// lack of history still counts.
    pub fn request_forecast(
        &mut self,
        forecaster: &dyn Forecaster,
        history: &ResultHistory,
        now: Instant,
    ) -> ForecastOutcome {
        if !self.forecast_throttle.try_acquire(now) {
            return ForecastOutcome::Throttled;
        }
        if history.len() < MIN_FORECAST_HISTORY {
            return ForecastOutcome::InsufficientHistory;
        }

        let net_emissions = self.result().net_emissions;
        let entries: Vec<LoggedResult> = history.entries();
        match forecaster.forecast(net_emissions, &entries) {
            Ok(forecast) => {
                let message = trend_message(&forecast);
                ForecastOutcome::Trend { forecast, message }
            }
            Err(e) => {
                warn!("Forecast failed: {}", e);
                ForecastOutcome::Offline(FORECAST_OFFLINE_NOTICE)
            }
        }
    }

    /// Convert an activity to CO2e and append it to the history.
    ///
    /// On failure the history is left unchanged.
    pub fn log_activity(
        &self,
        logger: &dyn ActivityLogger,
        history: &mut ResultHistory,
        activity: &Activity,
        now: DateTime<Utc>,
    ) -> ActivityOutcome {
        match logger.log_activity(activity) {
            Ok(impact) => {
                if let Err(e) = history.record(impact.co2e, now) {
                    warn!("Discarding activity result: {}", e);
                    return ActivityOutcome::Failed(LOGGER_OFFLINE_NOTICE);
                }
                let message = format!(
                    "Logged! Impact: {} {} added to your footprint.",
                    impact.co2e, impact.unit
                );
                ActivityOutcome::Logged { impact, message }
            }
            Err(e) => {
                warn!("Activity logging failed: {}", e);
                ActivityOutcome::Failed(LOGGER_OFFLINE_NOTICE)
            }
        }
    }
}

impl Default for ScenarioSession {
    fn default() -> Self {
        Self::new(ProjectionEngine::default(), SliderLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermocity_core::classification::Classification;

    #[test]
    fn test_starts_at_baseline() {
        let session = ScenarioSession::default();
        assert_eq!(session.adjustments(), AdjustmentSet::baseline());
        assert_eq!(session.view().result.classification, Classification::Dangerous);
    }

    #[test]
    fn test_set_adjustment_clamps() {
        let mut session = ScenarioSession::default();
        let view = session.set_adjustment(Category::Energy, 250.0);
        assert_eq!(view.adjustments.get(Category::Energy), 100.0);

        let view = session.set_adjustment(Category::Forest, 9_999.0);
        assert_eq!(view.adjustments.get(Category::Forest), 500.0);

        let view = session.set_adjustment(Category::Waste, -5.0);
        assert_eq!(view.adjustments.get(Category::Waste), 0.0);
    }

    #[test]
    fn test_apply_clamps_every_value() {
        let mut session = ScenarioSession::default();
        let view = session.apply(AdjustmentSet::uniform(1_000.0));
        assert_eq!(view.adjustments.get(Category::Transport), 100.0);
        assert_eq!(view.adjustments.get(Category::Ocean), 500.0);
    }

    #[test]
    fn test_max_green_and_reset() {
        let mut session = ScenarioSession::default();
        let green = session.max_green();
        assert!(Category::SOURCES
            .iter()
            .all(|c| green.adjustments.get(*c) == 0.0));
        assert!(Category::SINKS
            .iter()
            .all(|c| green.adjustments.get(*c) == 500.0));
        assert_eq!(green.result.classification, Classification::Safe);
        assert_eq!(green.result.gross_emissions, 0.0);

        let reset = session.reset();
        assert_eq!(reset.adjustments, AdjustmentSet::baseline());
    }

    #[test]
    fn test_max_green_respects_custom_limits() {
        let limits = SliderLimits::default().with_max(Category::Dac, 10_000.0);
        let mut session = ScenarioSession::new(ProjectionEngine::default(), limits);
        let view = session.max_green();
        assert_eq!(view.adjustments.get(Category::Dac), 10_000.0);
    }

    #[test]
    fn test_view_is_recomputed_from_scratch() {
        let mut session = ScenarioSession::default();
        session.set_adjustment(Category::Energy, 0.0);
        let first = session.view();
        let second = session.view();
        assert_eq!(first, second);
    }
}
