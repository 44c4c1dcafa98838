//! Presentation-side model and in-process collaborators for thermocity.
//!
//! - `session`: scenario state with one-way data flow and degraded-mode handling
//! - `limits`: slider ranges
//! - `readout`: display formatting
//! - `history`: bounded, persisted log of activity results
//! - `throttle`: rate limiting for forecast requests
//! - `activity`: emission-factor activity logger and household tips

pub mod activity;
pub mod history;
pub mod limits;
pub mod readout;
pub mod session;
pub mod throttle;
