//! ═══════════════════════════════════════════════════════════════════════════════
//! CALIBRATION — Research-Derived Decline Constants
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Papers prove the effect exists and tell us how fast; the data tells us
//! the trends. This module holds the paper side: fixed per-study constants
//! plus the two free parameters that gate how strongly the combined paper
//! effects feed into the yearly decline rate.
//!
//! ## Free parameters
//!
//! - `impact_scaling`: the dominant source of forecast uncertainty.
//!   0.22 = conservative lower bound (papers measure heavy users, the model
//!   needs a population average; effects may overlap; moderators exist).
//!   0.50 = central estimate. 1.0 = full paper effects, upper bound.
//! - `resilience_strength`: how strongly biological resilience damps the
//!   decline as the index approaches its floor.
//!
//! A `Calibration` is immutable once constructed. Sensitivity sweeps and
//! uncertainty bundles build a fresh instance per run; nothing is read from
//! ambient state.
//! ═══════════════════════════════════════════════════════════════════════════════

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Immutable calibration bundle, one per model instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Correction factor applied to the combined offload effects
    pub impact_scaling: f64,
    /// Biological resilience activation factor
    pub resilience_strength: f64,
}

impl Calibration {
    // Free-parameter defaults
    pub const DEFAULT_IMPACT_SCALING: f64 = 0.22;
    pub const DEFAULT_RESILIENCE_STRENGTH: f64 = 0.55;

    // Uncertainty presets for impact_scaling
    pub const CONSERVATIVE_IMPACT_SCALING: f64 = 0.22;
    pub const CENTRAL_IMPACT_SCALING: f64 = 0.50;
    pub const AGGRESSIVE_IMPACT_SCALING: f64 = 1.0;

    // Neural-connectivity study: cognitive debt accrual under heavy use
    pub const COGNITIVE_DEBT_PER_SIX_MONTHS: f64 = 0.5; // index points
    pub const COGNITIVE_DEBT_PER_MONTH: f64 = 0.083;

    // Critical-thinking study: fraction of cognitive effort offloaded
    pub const COGNITIVE_OFFLOAD_FRACTION: f64 = 0.71;

    // Agency benchmark: fraction of assistant behavior that risks offloading
    pub const OFFLOADING_RISK_FRACTION: f64 = 0.695;

    // Mental-health telemetry: severe-signal rate per week of heavy use
    pub const SEVERE_SIGNAL_RATE_PER_WEEK: f64 = 0.0022;
    pub const SEVERE_SIGNAL_RATE_PER_YEAR: f64 = Self::SEVERE_SIGNAL_RATE_PER_WEEK * 52.0;

    /// Conservative preset (lower bound, the model default)
    pub fn conservative() -> Self {
        Self {
            impact_scaling: Self::CONSERVATIVE_IMPACT_SCALING,
            resilience_strength: Self::DEFAULT_RESILIENCE_STRENGTH,
        }
    }

    /// Central preset (moderate real-world effects)
    pub fn central() -> Self {
        Self {
            impact_scaling: Self::CENTRAL_IMPACT_SCALING,
            resilience_strength: Self::DEFAULT_RESILIENCE_STRENGTH,
        }
    }

    /// Aggressive preset (full paper effects, upper bound)
    pub fn aggressive() -> Self {
        Self {
            impact_scaling: Self::AGGRESSIVE_IMPACT_SCALING,
            resilience_strength: Self::DEFAULT_RESILIENCE_STRENGTH,
        }
    }

    /// Override the impact scaling. Negative scaling is physically
    /// meaningless (offload cannot raise the index), so it is rejected.
    pub fn with_impact_scaling(self, impact_scaling: f64) -> Result<Self, ConfigError> {
        if !impact_scaling.is_finite() || impact_scaling < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "impact_scaling",
                message: format!("{} is not a non-negative finite value", impact_scaling),
            });
        }
        Ok(Self {
            impact_scaling,
            ..self
        })
    }

    /// Override the resilience strength. Must be non-negative and finite.
    pub fn with_resilience_strength(self, resilience_strength: f64) -> Result<Self, ConfigError> {
        if !resilience_strength.is_finite() || resilience_strength < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "resilience_strength",
                message: format!("{} is not a non-negative finite value", resilience_strength),
            });
        }
        Ok(Self {
            resilience_strength,
            ..self
        })
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            impact_scaling: Self::DEFAULT_IMPACT_SCALING,
            resilience_strength: Self::DEFAULT_RESILIENCE_STRENGTH,
        }
    }
}
