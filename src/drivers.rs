//! ═══════════════════════════════════════════════════════════════════════════════
//! DRIVERS — Empirical Trend Anchors
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! The data side of the model: what the exploratory analysis says about
//! adoption, capability, and the cognitive index so far. Pure data holder,
//! no computation and no failure modes. Identical across model instances.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

/// Static empirical anchors consumed by the trajectory functions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drivers {
    /// Assistant adoption fraction at the 2024 reference year
    pub adoption_2024: f64,
    /// Adoption compound annual growth rate (1.5632 = 156.32%/yr)
    pub adoption_cagr: f64,
    /// Capability at the reference year, normalized to 1.0
    pub capability_2024: f64,
    /// Capability growth multiplier per year (doubles yearly)
    pub capability_growth_rate: f64,
    /// Global population, billions
    pub global_population_billions: f64,
}

impl Drivers {
    /// First simulated year; the accumulator always replays from here
    pub const SIMULATION_EPOCH: i32 = 2020;
    /// Anchor year for the adoption/capability curves
    pub const REFERENCE_YEAR: i32 = 2024;

    // Cognitive index anchors (2012 = 100)
    pub const COGNITIVE_INDEX_2012: f64 = 100.0;
    pub const COGNITIVE_INDEX_2020: f64 = 98.0;
    /// Pre-AI secular decline, points per year
    pub const BASELINE_DECLINE_RATE: f64 = 0.35;
    /// Observed post-2022 decline acceleration (57% faster)
    pub const POST_AI_ACCELERATION: f64 = 1.57;

    // Biological limits
    /// Below this, resilience damping kicks in gradually
    pub const RESILIENCE_THRESHOLD: f64 = 84.0;
    /// Smooth asymptotic floor; the index never crosses it
    pub const COGNITIVE_INDEX_FLOOR: f64 = 80.0;
    /// Steepness of the exponential approach to the floor
    pub const ASYMPTOTE_STEEPNESS: f64 = 0.15;

    // Mental-health anchors
    pub const MENTAL_HEALTH_2024: f64 = 0.119;
    pub const MENTAL_HEALTH_CEILING: f64 = 0.30;
    /// Prevalence coupling per point of cumulative cognitive decline
    pub const MENTAL_HEALTH_COUPLING_PER_POINT: f64 = 0.003;

    // Historical adoption ramp (assistant launched late 2022)
    pub const ADOPTION_2022: f64 = 0.01;
    pub const ADOPTION_2023: f64 = 0.04;

    /// Fraction of adopters considered at risk
    pub const AT_RISK_FRACTION: f64 = 0.20;
}

impl Default for Drivers {
    fn default() -> Self {
        Self {
            adoption_2024: 0.091,
            adoption_cagr: 1.5632,
            capability_2024: 1.0,
            capability_growth_rate: 2.0,
            global_population_billions: 8.2,
        }
    }
}
