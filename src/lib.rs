//! ═══════════════════════════════════════════════════════════════════════════════
//! COGWATCH — Cognitive Debt Forecast Core
//! ═══════════════════════════════════════════════════════════════════════════════
//! Papers = calibration (prove it exists, tell us how fast).
//! Data = drivers (adoption, capability, cognitive index).
//! Model = data-driven, paper-calibrated.
//!
//! Single-threaded, deterministic, synchronous. The core consumes scalar
//! configuration (calibration overrides, a scenario, a year range) and
//! produces ordered yearly records; it has no I/O surface of its own and
//! never logs or prints. Presentation and ingestion live elsewhere and
//! consume trajectories by value.
//! ═══════════════════════════════════════════════════════════════════════════════

// Physical constants need full precision
#![allow(clippy::excessive_precision)]

// ═══════════════════════════════════════════════════════════════════════════════
// FOUNDATION — errors, statistics, calibration, drivers
// ═══════════════════════════════════════════════════════════════════════════════

pub mod calibration;
pub mod drivers;
pub mod error;
pub mod stats;

// ═══════════════════════════════════════════════════════════════════════════════
// CORE — scenario catalogue and the forecast orchestrator
// ═══════════════════════════════════════════════════════════════════════════════

pub mod model;
pub mod scenario;

// ═══════════════════════════════════════════════════════════════════════════════
// ANALYSIS — historical fit and parameter sensitivity
// ═══════════════════════════════════════════════════════════════════════════════

pub mod sensitivity;
pub mod validation;

pub use calibration::Calibration;
pub use drivers::Drivers;
pub use error::{CogwatchError, CogwatchResult};
pub use model::{
    CognitiveDebtModel, Trajectory, UncertaintyBundle, UncertaintyLevel, YearRecord,
};
pub use scenario::Scenario;
pub use validation::{FitReport, ValidationHarness};
