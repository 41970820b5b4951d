//! ═══════════════════════════════════════════════════════════════════════════════
//! MODEL — Cognitive Debt Forecast Orchestrator
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Data-driven, paper-calibrated. Iterates year by year, combines the
//! scenario evaluators with the calibration constants into a decline rate,
//! and accumulates the cognitive index toward its biological floor.
//!
//! Every run is an independent deterministic replay from the 2020 baseline
//! (index 98.0): the accumulator integrates from the epoch in strictly
//! increasing year order and emits records only for the requested range.
//! Correctness depends on the year order — the deceleration scenario is a
//! stateful accumulation, and the resilience damping reads the running
//! index. There is no cross-call state and no I/O; two identical calls
//! produce identical trajectories.
//! ═══════════════════════════════════════════════════════════════════════════════

use crate::calibration::Calibration;
use crate::drivers::Drivers;
use crate::error::{CogwatchResult, ConfigError};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Decline cap, points per year. High enough to differentiate scenarios.
const MAX_DECLINE_PER_YEAR: f64 = 5.0;
/// Resilience damping never fully stops the decline
const MIN_RESILIENCE_FACTOR: f64 = 0.05;
/// Log-damping weight on the capability term of the debt-accrual factor
const DEBT_CAPABILITY_LOG_WEIGHT: f64 = 2.5;
/// Cap on the log-damped capability factor
const DEBT_CAPABILITY_CAP: f64 = 10.0;
/// Log-damping weight on the capability term of the offload factor
const OFFLOAD_CAPABILITY_LOG_WEIGHT: f64 = 0.8;
/// Weight on the agency-risk factor
const AGENCY_RISK_WEIGHT: f64 = 0.3;
/// Average weeks per month, for the exposure timeline
const WEEKS_PER_MONTH: f64 = 4.33;

/// Risk thresholds on the cognitive index, used by downstream reporting
pub mod thresholds {
    pub const WARNING: f64 = 95.0;
    pub const DANGER: f64 = 92.0;
    pub const CRITICAL: f64 = 88.0;
    pub const SEVERE: f64 = 84.0;
}

/// One simulated year. Produced exactly once per (scenario, year) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    /// Adoption fraction, [0, 1]
    pub adoption: f64,
    /// Capability, normalized to 2024 = 1.0
    pub capability: f64,
    /// Composite cognitive index (2012 = 100)
    pub cognitive_index: f64,
    /// Cumulative decline from the 2012 baseline
    pub cognitive_debt: f64,
    /// Decline rate computed for this year, points/yr
    pub decline_rate: f64,
    /// Mental-health prevalence, [0, ceiling]
    pub mental_health: f64,
    /// Adopters at risk, millions
    pub users_at_risk_millions: f64,
}

/// Ordered sequence of yearly records from one `run_scenario` call.
/// Immutable after construction; consumers copy out, never mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub scenario: Scenario,
    records: Vec<YearRecord>,
}

impl Trajectory {
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.records.iter()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// Record for a specific year, if simulated
    pub fn record_at(&self, year: i32) -> Option<&YearRecord> {
        let first = self.first_year()?;
        if year < first {
            return None;
        }
        self.records.get((year - first) as usize)
    }

    /// Cognitive index at a specific year, if simulated
    pub fn index_at(&self, year: i32) -> Option<f64> {
        self.record_at(year).map(|r| r.cognitive_index)
    }

    /// First year the index drops below `threshold`, if it does
    pub fn first_year_below(&self, threshold: f64) -> Option<i32> {
        self.records
            .iter()
            .find(|r| r.cognitive_index < threshold)
            .map(|r| r.year)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Uncertainty preset labels, ordered by impact scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UncertaintyLevel {
    Conservative,
    Central,
    Aggressive,
}

impl UncertaintyLevel {
    pub const ALL: [UncertaintyLevel; 3] = [
        UncertaintyLevel::Conservative,
        UncertaintyLevel::Central,
        UncertaintyLevel::Aggressive,
    ];

    pub fn calibration(self) -> Calibration {
        match self {
            UncertaintyLevel::Conservative => Calibration::conservative(),
            UncertaintyLevel::Central => Calibration::central(),
            UncertaintyLevel::Aggressive => Calibration::aggressive(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UncertaintyLevel::Conservative => "conservative",
            UncertaintyLevel::Central => "central",
            UncertaintyLevel::Aggressive => "aggressive",
        }
    }
}

/// Three independent trajectories of the same scenario at the documented
/// impact-scaling presets. No shared state between the runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyBundle {
    pub conservative: Trajectory,
    pub central: Trajectory,
    pub aggressive: Trajectory,
}

impl UncertaintyBundle {
    pub fn get(&self, level: UncertaintyLevel) -> &Trajectory {
        match level {
            UncertaintyLevel::Conservative => &self.conservative,
            UncertaintyLevel::Central => &self.central,
            UncertaintyLevel::Aggressive => &self.aggressive,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (UncertaintyLevel, &Trajectory)> {
        UncertaintyLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// Qualitative band for an individual's months of heavy use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExposureStatus {
    Baseline,
    EarlyDependency,
    MeasurableDecline,
    SignificantHarm,
    SeriousImpairment,
    SevereImpairment,
}

/// One row of the individual-harm timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureMilestone {
    pub months: u32,
    pub cognitive_debt_points: f64,
    pub mental_health_risk: f64,
    pub status: ExposureStatus,
}

/// Main forecast model: data-driven, paper-calibrated
#[derive(Debug, Clone, Default)]
pub struct CognitiveDebtModel {
    calibration: Calibration,
    drivers: Drivers,
}

impl CognitiveDebtModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self {
            calibration,
            drivers: Drivers::default(),
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn drivers(&self) -> &Drivers {
        &self.drivers
    }

    /// Run one scenario over `[start_year, end_year]` inclusive.
    ///
    /// The accumulator replays from the 2020 epoch regardless of
    /// `start_year`, so a 2024-2030 window reports the same index values
    /// that a 2020-2030 run would; only the emitted records differ.
    pub fn run_scenario(
        &self,
        scenario: Scenario,
        start_year: i32,
        end_year: i32,
    ) -> CogwatchResult<Trajectory> {
        if end_year < start_year {
            return Err(ConfigError::InvalidYearRange {
                start_year,
                end_year,
            }
            .into());
        }
        if start_year < Drivers::SIMULATION_EPOCH {
            return Err(ConfigError::YearBeforeEpoch {
                year: start_year,
                epoch: Drivers::SIMULATION_EPOCH,
            }
            .into());
        }

        let mut records = Vec::with_capacity((end_year - start_year + 1) as usize);
        let mut index = Drivers::COGNITIVE_INDEX_2020;

        // Strictly increasing years: the loop body is stateful.
        for year in Drivers::SIMULATION_EPOCH..=end_year {
            let adoption = scenario.adoption(year, &self.drivers);
            let capability = scenario.capability(year, &self.drivers);
            let decline = self.decline_rate(year, adoption, capability, index, scenario);

            if year > Drivers::SIMULATION_EPOCH {
                index = apply_decline(index, decline);
            }

            if year >= start_year {
                let cognitive_debt = Drivers::COGNITIVE_INDEX_2012 - index;
                records.push(YearRecord {
                    year,
                    adoption,
                    capability,
                    cognitive_index: index,
                    cognitive_debt,
                    decline_rate: decline,
                    mental_health: self.mental_health_rate(adoption, index),
                    users_at_risk_millions: adoption
                        * self.drivers.global_population_billions
                        * Drivers::AT_RISK_FRACTION
                        * 1000.0,
                });
            }
        }

        Ok(Trajectory { scenario, records })
    }

    /// Parse a catalogue key and run it
    pub fn run_named(
        &self,
        key: &str,
        start_year: i32,
        end_year: i32,
    ) -> CogwatchResult<Trajectory> {
        let scenario: Scenario = key.parse()?;
        self.run_scenario(scenario, start_year, end_year)
    }

    /// Run one scenario at the three documented impact-scaling presets.
    /// Three independent model instances; only the scaling differs.
    pub fn run_scenario_with_uncertainty(
        &self,
        scenario: Scenario,
        start_year: i32,
        end_year: i32,
    ) -> CogwatchResult<UncertaintyBundle> {
        let run = |level: UncertaintyLevel| {
            CognitiveDebtModel::with_calibration(level.calibration())
                .run_scenario(scenario, start_year, end_year)
        };
        Ok(UncertaintyBundle {
            conservative: run(UncertaintyLevel::Conservative)?,
            central: run(UncertaintyLevel::Central)?,
            aggressive: run(UncertaintyLevel::Aggressive)?,
        })
    }

    /// Yearly decline rate in index points.
    ///
    /// Each research factor is log-damped in capability: capability
    /// compounds by orders of magnitude, and raw multiplicative scaling
    /// would let it dominate the rate.
    fn decline_rate(
        &self,
        year: i32,
        adoption: f64,
        capability: f64,
        current_index: f64,
        scenario: Scenario,
    ) -> f64 {
        let base = Drivers::BASELINE_DECLINE_RATE;

        // Debt accrual: 0.083 points/month per heavy user, annualized
        let debt_factor = Calibration::COGNITIVE_DEBT_PER_MONTH
            * 12.0
            * adoption
            * (capability.ln_1p() * DEBT_CAPABILITY_LOG_WEIGHT).min(DEBT_CAPABILITY_CAP);

        // Offloaded effort; design improvements cut it after their year
        let offload_factor = Calibration::COGNITIVE_OFFLOAD_FRACTION
            * adoption
            * (capability.ln_1p() * OFFLOAD_CAPABILITY_LOG_WEIGHT)
            * scenario.design_multiplier(year);

        // Agency-risk exposure
        let agency_factor = Calibration::OFFLOADING_RISK_FRACTION * adoption * AGENCY_RISK_WEIGHT;

        // Empirically observed post-2022 acceleration of the baseline
        let empirical = base * (Drivers::POST_AI_ACCELERATION - 1.0) * adoption;

        let mut total = base
            + (debt_factor + offload_factor + agency_factor + empirical)
                * scenario.impact_multiplier()
                * self.calibration.impact_scaling;

        // Biological resilience: smooth damping below the threshold,
        // stronger the closer the index sits to the floor.
        if current_index < Drivers::RESILIENCE_THRESHOLD {
            let distance_below = Drivers::RESILIENCE_THRESHOLD - current_index;
            let max_distance = Drivers::RESILIENCE_THRESHOLD - Drivers::COGNITIVE_INDEX_FLOOR;
            let resilience_factor = (1.0
                - self.calibration.resilience_strength * (distance_below / max_distance))
                .max(MIN_RESILIENCE_FACTOR);
            total *= resilience_factor;
        }

        total.min(MAX_DECLINE_PER_YEAR)
    }

    /// Mental-health prevalence from adoption exposure plus coupling with
    /// cumulative cognitive decline, capped at the realistic ceiling
    pub fn mental_health_rate(&self, adoption: f64, cognitive_index: f64) -> f64 {
        let new_cases = adoption * Calibration::SEVERE_SIGNAL_RATE_PER_YEAR;
        let cumulative_decline = Drivers::COGNITIVE_INDEX_2012 - cognitive_index;
        let coupling = cumulative_decline * Drivers::MENTAL_HEALTH_COUPLING_PER_POINT;
        (Drivers::MENTAL_HEALTH_2024 + new_cases + coupling).min(Drivers::MENTAL_HEALTH_CEILING)
    }

    /// Individual harm timeline for months of heavy use
    pub fn exposure_timeline(&self) -> Vec<ExposureMilestone> {
        [0u32, 3, 6, 12, 18, 24, 36]
            .into_iter()
            .map(|months| {
                let status = match months {
                    0 => ExposureStatus::Baseline,
                    1..=3 => ExposureStatus::EarlyDependency,
                    4..=6 => ExposureStatus::MeasurableDecline,
                    7..=12 => ExposureStatus::SignificantHarm,
                    13..=24 => ExposureStatus::SeriousImpairment,
                    _ => ExposureStatus::SevereImpairment,
                };
                ExposureMilestone {
                    months,
                    cognitive_debt_points: months as f64 * Calibration::COGNITIVE_DEBT_PER_MONTH,
                    mental_health_risk: (months as f64 / WEEKS_PER_MONTH)
                        * Calibration::SEVERE_SIGNAL_RATE_PER_WEEK,
                    status,
                }
            })
            .collect()
    }
}

/// Asymptotic approach to the floor: the effective decline shrinks
/// exponentially with remaining distance, and never overshoots it.
fn apply_decline(index: f64, decline: f64) -> f64 {
    let distance_from_floor = index - Drivers::COGNITIVE_INDEX_FLOOR;
    if distance_from_floor <= 0.0 {
        return Drivers::COGNITIVE_INDEX_FLOOR;
    }
    let decay_multiplier = 1.0 - (-Drivers::ASYMPTOTE_STEEPNESS * distance_from_floor).exp();
    let effective_decline = (decline * decay_multiplier).min(distance_from_floor);
    index - effective_decline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_trajectory_shape() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2020, 2035).unwrap();
        assert_eq!(t.len(), 16);
        for (i, pair) in t.records().windows(2).enumerate() {
            assert_eq!(pair[1].year, pair[0].year + 1, "gap after record {}", i);
        }
        assert_eq!(t.first_year(), Some(2020));
        assert_eq!(t.last_year(), Some(2035));
    }

    #[test]
    fn test_single_year_range() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2030, 2030).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.records()[0].year, 2030);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let model = CognitiveDebtModel::new();
        assert!(model.run_scenario(Scenario::Current, 2030, 2024).is_err());
        assert!(model.run_scenario(Scenario::Current, 2018, 2030).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let model = CognitiveDebtModel::new();
        assert!(model.run_named("quantum_leap", 2020, 2030).is_err());
        assert!(model.run_named("slow_50", 2020, 2030).is_ok());
    }

    #[test]
    fn test_index_starts_at_2020_baseline() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2020, 2025).unwrap();
        assert_eq!(t.records()[0].cognitive_index, 98.0);
        assert_eq!(t.records()[0].cognitive_debt, 2.0);
    }

    #[test]
    fn test_index_non_increasing() {
        let model = CognitiveDebtModel::with_calibration(Calibration::aggressive());
        for scenario in Scenario::catalogue() {
            let t = model.run_scenario(scenario, 2020, 2045).unwrap();
            for pair in t.records().windows(2) {
                assert!(
                    pair[1].cognitive_index <= pair[0].cognitive_index,
                    "{} rose at {}",
                    scenario,
                    pair[1].year
                );
            }
        }
    }

    #[test]
    fn test_index_never_crosses_floor() {
        let model = CognitiveDebtModel::with_calibration(Calibration::aggressive());
        let t = model.run_scenario(Scenario::Misalignment, 2020, 2080).unwrap();
        for r in &t {
            assert!(r.cognitive_index >= Drivers::COGNITIVE_INDEX_FLOOR);
        }
        // Asymptotic: by 2080 it sits essentially on the floor
        assert!(close(t.index_at(2080).unwrap(), 80.0, 0.01));
    }

    #[test]
    fn test_debt_is_index_complement() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2020, 2035).unwrap();
        for r in &t {
            assert!(close(r.cognitive_debt, 100.0 - r.cognitive_index, 1e-12));
        }
    }

    #[test]
    fn test_replay_semantics_window_independent() {
        let model = CognitiveDebtModel::new();
        let full = model.run_scenario(Scenario::Current, 2020, 2030).unwrap();
        let window = model.run_scenario(Scenario::Current, 2024, 2030).unwrap();
        for r in &window {
            assert_eq!(Some(r.cognitive_index), full.index_at(r.year));
        }
    }

    #[test]
    fn test_determinism() {
        let model = CognitiveDebtModel::new();
        let a = model.run_scenario(Scenario::CapabilityDeceleration, 2020, 2040).unwrap();
        let b = model.run_scenario(Scenario::CapabilityDeceleration, 2020, 2040).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_projection_2030() {
        // Documented pin: default calibration, current rates, 2024-2030
        // window -> index 87.1 at 2030.
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2024, 2030).unwrap();
        assert!(close(t.index_at(2030).unwrap(), 87.1, 0.05));
        // Exact model value, pinned tighter against regressions
        assert!(close(t.index_at(2030).unwrap(), 87.1061, 5e-4));
    }

    #[test]
    fn test_preset_projections_2030() {
        // Documented 2030 triple: 87.1 / 81.6 / 80.7
        let expected = [
            (UncertaintyLevel::Conservative, 87.1),
            (UncertaintyLevel::Central, 81.6),
            (UncertaintyLevel::Aggressive, 80.7),
        ];
        for (level, want) in expected {
            let model = CognitiveDebtModel::with_calibration(level.calibration());
            let t = model.run_scenario(Scenario::Current, 2020, 2030).unwrap();
            assert!(
                close(t.index_at(2030).unwrap(), want, 0.05),
                "{}: {}",
                level.label(),
                t.index_at(2030).unwrap()
            );
        }
    }

    #[test]
    fn test_uncertainty_ordering() {
        let model = CognitiveDebtModel::new();
        let bundle = model
            .run_scenario_with_uncertainty(Scenario::Current, 2020, 2035)
            .unwrap();
        for ((c, m), a) in bundle
            .conservative
            .iter()
            .zip(bundle.central.iter())
            .zip(bundle.aggressive.iter())
        {
            assert_eq!(c.year, m.year);
            assert_eq!(m.year, a.year);
            assert!(c.cognitive_index >= m.cognitive_index);
            assert!(m.cognitive_index >= a.cognitive_index);
        }
    }

    #[test]
    fn test_uncertainty_spread_significant() {
        let model = CognitiveDebtModel::new();
        let bundle = model
            .run_scenario_with_uncertainty(Scenario::Current, 2020, 2035)
            .unwrap();
        let spread = bundle.conservative.index_at(2030).unwrap()
            - bundle.aggressive.index_at(2030).unwrap();
        assert!(spread >= 4.0, "spread {}", spread);
    }

    #[test]
    fn test_design_improvement_softens_decline() {
        let model = CognitiveDebtModel::new();
        let current = model.run_scenario(Scenario::Current, 2020, 2035).unwrap();
        let design = model
            .run_scenario(Scenario::DesignImprovement { year: 2026 }, 2020, 2035)
            .unwrap();
        // Identical up to the improvement year
        assert_eq!(design.index_at(2025), current.index_at(2025));
        // Strictly better afterward
        assert!(design.index_at(2030).unwrap() > current.index_at(2030).unwrap());
    }

    #[test]
    fn test_misalignment_is_worst_named_scenario() {
        let model = CognitiveDebtModel::new();
        let worst = model
            .run_scenario(Scenario::Misalignment, 2020, 2030)
            .unwrap()
            .index_at(2030)
            .unwrap();
        for scenario in Scenario::catalogue() {
            let idx = model
                .run_scenario(scenario, 2020, 2030)
                .unwrap()
                .index_at(2030)
                .unwrap();
            assert!(worst <= idx, "{} beat misalignment", scenario);
        }
    }

    #[test]
    fn test_intervention_beats_baseline() {
        let model = CognitiveDebtModel::new();
        let baseline = model
            .run_scenario(Scenario::Current, 2020, 2035)
            .unwrap();
        let early = model
            .run_named("intervention_2026", 2020, 2035)
            .unwrap();
        let late = model
            .run_named("intervention_2028", 2020, 2035)
            .unwrap();
        assert!(early.index_at(2035).unwrap() > late.index_at(2035).unwrap());
        assert!(late.index_at(2035).unwrap() > baseline.index_at(2035).unwrap());
    }

    #[test]
    fn test_threshold_crossings() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2020, 2035).unwrap();
        // 2027 = 93.53, 2028 = 91.58, 2029 = 89.38, 2030 = 87.11
        assert_eq!(t.first_year_below(thresholds::WARNING), Some(2027));
        assert_eq!(t.first_year_below(thresholds::DANGER), Some(2028));
        assert_eq!(t.first_year_below(thresholds::CRITICAL), Some(2030));
    }

    #[test]
    fn test_mental_health_capped() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Misalignment, 2020, 2050).unwrap();
        for r in &t {
            assert!(r.mental_health <= Drivers::MENTAL_HEALTH_CEILING);
        }
        // Saturates once adoption hits its ceiling and the index its floor:
        // 0.119 + 0.95 * 0.1144 + 20 * 0.003
        let saturated = t.record_at(2050).unwrap().mental_health;
        assert!(close(saturated, 0.28768, 1e-4));
    }

    #[test]
    fn test_users_at_risk() {
        let model = CognitiveDebtModel::new();
        let t = model.run_scenario(Scenario::Current, 2030, 2030).unwrap();
        // 0.95 * 8.2B * 20% = 1558M
        assert!(close(t.records()[0].users_at_risk_millions, 1558.0, 0.5));
    }

    #[test]
    fn test_exposure_timeline() {
        let model = CognitiveDebtModel::new();
        let timeline = model.exposure_timeline();
        assert_eq!(timeline.len(), 7);
        assert_eq!(timeline[0].status, ExposureStatus::Baseline);
        assert_eq!(timeline[0].cognitive_debt_points, 0.0);
        // 6 months of heavy use: ~0.5 index points
        let six = timeline.iter().find(|m| m.months == 6).unwrap();
        assert!(close(six.cognitive_debt_points, 0.498, 1e-9));
        assert_eq!(six.status, ExposureStatus::MeasurableDecline);
        let three_years = timeline.last().unwrap();
        assert_eq!(three_years.status, ExposureStatus::SevereImpairment);
    }

    #[test]
    fn test_decline_capped() {
        // Even with full paper effects and doubled impact, the yearly
        // decline never exceeds the cap.
        let model = CognitiveDebtModel::with_calibration(Calibration::aggressive());
        let t = model.run_scenario(Scenario::Misalignment, 2020, 2040).unwrap();
        for r in &t {
            assert!(r.decline_rate <= MAX_DECLINE_PER_YEAR + 1e-12);
        }
    }
}
