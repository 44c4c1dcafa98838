//! Core of the thermocity climate-scenario calculator.
//!
//! A scenario is an [`adjustment::AdjustmentSet`]: a percentage for each emission
//! source and removal sink. The [`engine::ProjectionEngine`] turns a scenario into
//! net emissions, a warming trajectory to the horizon year and a classification
//! against the Paris Agreement thresholds.
//!
//! ```rust
//! use thermocity_core::adjustment::AdjustmentSet;
//! use thermocity_core::category::Category;
//! use thermocity_core::classification::Classification;
//! use thermocity_core::engine::ProjectionEngine;
//!
//! let engine = ProjectionEngine::default();
//! let scenario = AdjustmentSet::baseline().with(Category::Energy, 0.0);
//! let result = engine.compute_scenario(&scenario);
//!
//! assert_eq!(result.trajectory.len(), 9);
//! assert_eq!(result.classification, Classification::Warning);
//! ```

pub mod adjustment;
pub mod baseline;
pub mod category;
pub mod classification;
pub mod collaborators;
pub mod engine;
pub mod errors;
pub mod parameters;
pub mod trajectory;
