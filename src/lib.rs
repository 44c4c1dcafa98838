//! thermocity: an interactive climate-scenario calculator.
//!
//! Re-exports the projection engine ([`core`]) and the presentation-side session,
//! history and activity logging ([`components`]).

pub use thermocity_components as components;
pub use thermocity_core as core;

pub use thermocity_components::session::{ScenarioSession, ScenarioView};
pub use thermocity_core::adjustment::AdjustmentSet;
pub use thermocity_core::category::Category;
pub use thermocity_core::classification::Classification;
pub use thermocity_core::engine::{ProjectionEngine, ScenarioResult};
