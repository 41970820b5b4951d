//! ═══════════════════════════════════════════════════════════════════════════════
//! SCENARIO — Closed Catalogue of Adoption/Capability Policies
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! A scenario is a named, deterministic policy for how assistant adoption
//! and capability evolve over the simulated years. The catalogue is a
//! closed enum: adding or misspelling a scenario is caught at the match
//! sites or at parse time, never silently defaulted.
//!
//! Both evaluators are pure functions of (year, drivers). No hidden state,
//! so uncertainty bundles and sensitivity sweeps can re-invoke them across
//! independent model instances.
//!
//! Years before the simulation epoch (2020) return the epoch value; the
//! curves are never extrapolated backward past it.
//! ═══════════════════════════════════════════════════════════════════════════════

use crate::drivers::Drivers;
use crate::error::UnknownScenarioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adoption ceiling under baseline growth
const BASELINE_ADOPTION_CEILING: f64 = 0.95;
/// Post-intervention adoption growth rate (down from the full CAGR)
const INTERVENTION_POST_GROWTH: f64 = 0.25;
/// Design-improvement scenarios cut effective offloading by 40%
const DESIGN_OFFLOAD_REDUCTION: f64 = 0.6;
/// Misalignment doubles the combined offload impact
const MISALIGNMENT_MULTIPLIER: f64 = 2.0;

/// Capability deceleration tiers: (max years since reference, multiplier).
/// Ages past the last tier use the tail multiplier. Deliberately a lookup
/// table driving an iterative accumulation, not a closed form.
const DECELERATION_TIERS: [(i32, f64); 3] = [(2, 2.0), (4, 1.5), (6, 1.2)];
const DECELERATION_TAIL: f64 = 1.1;

/// The closed scenario catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scenario {
    /// Current rates: full CAGR adoption, capability doubling yearly
    Current,
    /// Adoption CAGR multiplied by `factor` < 1, with a reduced ceiling
    AdoptionSlowdown { factor: f64, ceiling: f64 },
    /// Adoption CAGR multiplied by `factor` > 1, with a raised ceiling
    AdoptionAcceleration { factor: f64, ceiling: f64 },
    /// Capability growth frozen at `year`
    CapabilityPlateau { year: i32 },
    /// Capability growth rate multiplied by `factor`
    CapabilityAcceleration { factor: f64 },
    /// Capability growth multiplier decays over tiered year bands
    CapabilityDeceleration,
    /// Policy response at `year`: adoption growth collapses afterward
    Intervention { year: i32, ceiling: f64 },
    /// Assistant design improves at `year`, cutting offloading by 40%
    DesignImprovement { year: i32 },
    /// Worst case: combined offload impact doubled
    Misalignment,
}

impl Scenario {
    /// All named presets, in catalogue order
    pub fn catalogue() -> Vec<Scenario> {
        vec![
            Scenario::Current,
            Scenario::AdoptionSlowdown {
                factor: 0.9,
                ceiling: 0.90,
            },
            Scenario::AdoptionSlowdown {
                factor: 0.8,
                ceiling: 0.85,
            },
            Scenario::AdoptionSlowdown {
                factor: 0.5,
                ceiling: 0.70,
            },
            Scenario::AdoptionAcceleration {
                factor: 1.2,
                ceiling: 0.97,
            },
            Scenario::AdoptionAcceleration {
                factor: 1.5,
                ceiling: 0.98,
            },
            Scenario::AdoptionAcceleration {
                factor: 2.0,
                ceiling: 0.99,
            },
            Scenario::CapabilityPlateau { year: 2026 },
            Scenario::CapabilityPlateau { year: 2028 },
            Scenario::CapabilityAcceleration { factor: 1.5 },
            Scenario::CapabilityDeceleration,
            Scenario::Intervention {
                year: 2026,
                ceiling: 0.70,
            },
            Scenario::Intervention {
                year: 2028,
                ceiling: 0.75,
            },
            Scenario::DesignImprovement { year: 2026 },
            Scenario::Misalignment,
        ]
    }

    /// Assistant adoption fraction for `year` under this scenario.
    /// Exponential growth from the 2024 anchor, clamped to the scenario
    /// ceiling. The 2020-2023 ramp is historical, identical across
    /// scenarios (the assistant launched late 2022).
    pub fn adoption(&self, year: i32, drivers: &Drivers) -> f64 {
        let year = year.max(Drivers::SIMULATION_EPOCH);
        if year < Drivers::REFERENCE_YEAR {
            return match year {
                2022 => Drivers::ADOPTION_2022,
                2023 => Drivers::ADOPTION_2023,
                _ => 0.0,
            };
        }
        let years = year - Drivers::REFERENCE_YEAR;
        match *self {
            Scenario::AdoptionSlowdown { factor, ceiling }
            | Scenario::AdoptionAcceleration { factor, ceiling } => {
                grow(drivers.adoption_2024, drivers.adoption_cagr * factor, years).min(ceiling)
            }
            Scenario::Intervention {
                year: intervention_year,
                ceiling,
            } => {
                let pre_years = intervention_year - Drivers::REFERENCE_YEAR;
                let adoption = if year <= intervention_year {
                    grow(
                        drivers.adoption_2024,
                        drivers.adoption_cagr,
                        years.min(pre_years),
                    )
                } else {
                    let at_intervention =
                        grow(drivers.adoption_2024, drivers.adoption_cagr, pre_years);
                    at_intervention
                        * (1.0 + INTERVENTION_POST_GROWTH).powi(year - intervention_year)
                };
                adoption.min(ceiling)
            }
            _ => grow(drivers.adoption_2024, drivers.adoption_cagr, years)
                .min(BASELINE_ADOPTION_CEILING),
        }
    }

    /// Assistant capability for `year`, normalized to 2024 = 1.0
    pub fn capability(&self, year: i32, drivers: &Drivers) -> f64 {
        let year = year.max(Drivers::SIMULATION_EPOCH);
        let years = year - Drivers::REFERENCE_YEAR;
        match *self {
            Scenario::CapabilityPlateau { year: plateau_year } => {
                let capped = years.min(plateau_year - Drivers::REFERENCE_YEAR);
                drivers.capability_2024 * drivers.capability_growth_rate.powi(capped)
            }
            Scenario::CapabilityAcceleration { factor } => {
                drivers.capability_2024 * (drivers.capability_growth_rate * factor).powi(years)
            }
            Scenario::CapabilityDeceleration => {
                if years <= 0 {
                    return drivers.capability_2024;
                }
                // Iterative accumulation: each year applies its tier
                // multiplier to the prior year's capability.
                let mut capability = drivers.capability_2024;
                for age in 1..=years {
                    capability *= deceleration_multiplier(age);
                }
                capability
            }
            _ => drivers.capability_2024 * drivers.capability_growth_rate.powi(years),
        }
    }

    /// Multiplicative reduction of the offload term. 1.0 everywhere except
    /// design-improvement years at or after the improvement year; the gate
    /// is time-conditional, so it must be evaluated per year inside the
    /// simulation loop.
    pub fn design_multiplier(&self, year: i32) -> f64 {
        match *self {
            Scenario::DesignImprovement {
                year: improvement_year,
            } if year >= improvement_year => DESIGN_OFFLOAD_REDUCTION,
            _ => 1.0,
        }
    }

    /// Multiplier on the combined offload impact (misalignment doubles it)
    pub fn impact_multiplier(&self) -> f64 {
        match self {
            Scenario::Misalignment => MISALIGNMENT_MULTIPLIER,
            _ => 1.0,
        }
    }
}

fn grow(base: f64, rate: f64, years: i32) -> f64 {
    base * (1.0 + rate).powi(years)
}

fn deceleration_multiplier(age: i32) -> f64 {
    for (max_age, multiplier) in DECELERATION_TIERS {
        if age <= max_age {
            return multiplier;
        }
    }
    DECELERATION_TAIL
}

impl FromStr for Scenario {
    type Err = UnknownScenarioError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let scenario = match key {
            "current" => Scenario::Current,
            "slow_10" => Scenario::AdoptionSlowdown {
                factor: 0.9,
                ceiling: 0.90,
            },
            "slow_20" => Scenario::AdoptionSlowdown {
                factor: 0.8,
                ceiling: 0.85,
            },
            "slow_50" => Scenario::AdoptionSlowdown {
                factor: 0.5,
                ceiling: 0.70,
            },
            "accel_1.2x" => Scenario::AdoptionAcceleration {
                factor: 1.2,
                ceiling: 0.97,
            },
            "accel_1.5x" => Scenario::AdoptionAcceleration {
                factor: 1.5,
                ceiling: 0.98,
            },
            "accel_2x" => Scenario::AdoptionAcceleration {
                factor: 2.0,
                ceiling: 0.99,
            },
            "capability_plateau_2026" => Scenario::CapabilityPlateau { year: 2026 },
            "capability_plateau_2028" => Scenario::CapabilityPlateau { year: 2028 },
            "capability_accel_1.5x" => Scenario::CapabilityAcceleration { factor: 1.5 },
            "capability_deceleration" => Scenario::CapabilityDeceleration,
            "intervention_2026" => Scenario::Intervention {
                year: 2026,
                ceiling: 0.70,
            },
            "intervention_2028" => Scenario::Intervention {
                year: 2028,
                ceiling: 0.75,
            },
            "design_improvement_2026" => Scenario::DesignImprovement { year: 2026 },
            "misalignment" => Scenario::Misalignment,
            _ => {
                return Err(UnknownScenarioError {
                    key: key.to_string(),
                })
            }
        };
        Ok(scenario)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scenario::Current => write!(f, "current"),
            Scenario::AdoptionSlowdown { factor, .. } => {
                write!(f, "slow_{:.0}", (1.0 - factor) * 100.0)
            }
            Scenario::AdoptionAcceleration { factor, .. } => {
                if (factor - factor.round()).abs() < f64::EPSILON {
                    write!(f, "accel_{:.0}x", factor)
                } else {
                    write!(f, "accel_{}x", factor)
                }
            }
            Scenario::CapabilityPlateau { year } => write!(f, "capability_plateau_{}", year),
            Scenario::CapabilityAcceleration { factor } => {
                write!(f, "capability_accel_{}x", factor)
            }
            Scenario::CapabilityDeceleration => write!(f, "capability_deceleration"),
            Scenario::Intervention { year, .. } => write!(f, "intervention_{}", year),
            Scenario::DesignImprovement { year } => write!(f, "design_improvement_{}", year),
            Scenario::Misalignment => write!(f, "misalignment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drivers() -> Drivers {
        Drivers::default()
    }

    #[test]
    fn test_catalogue_round_trips_through_keys() {
        for scenario in Scenario::catalogue() {
            let key = scenario.to_string();
            let parsed: Scenario = key.parse().unwrap_or_else(|e| panic!("{}: {}", key, e));
            assert_eq!(parsed, scenario, "key {}", key);
        }
    }

    #[test]
    fn test_unknown_key_fails_fast() {
        let err = "adoption_warp".parse::<Scenario>().unwrap_err();
        assert_eq!(err.key, "adoption_warp");
    }

    #[test]
    fn test_baseline_adoption_monotone_and_capped() {
        let d = drivers();
        let mut prev = 0.0;
        for year in 2020..=2040 {
            let a = Scenario::Current.adoption(year, &d);
            assert!(a >= prev, "adoption dipped at {}", year);
            assert!(a <= BASELINE_ADOPTION_CEILING);
            prev = a;
        }
        // Saturates well before 2040
        assert_eq!(Scenario::Current.adoption(2040, &d), 0.95);
    }

    #[test]
    fn test_historical_ramp_shared_by_all_scenarios() {
        let d = drivers();
        for scenario in Scenario::catalogue() {
            assert_eq!(scenario.adoption(2020, &d), 0.0);
            assert_eq!(scenario.adoption(2021, &d), 0.0);
            assert_eq!(scenario.adoption(2022, &d), 0.01);
            assert_eq!(scenario.adoption(2023, &d), 0.04);
            assert_eq!(scenario.adoption(2024, &d), 0.091);
        }
    }

    #[test]
    fn test_pre_epoch_years_return_epoch_values() {
        let d = drivers();
        for scenario in Scenario::catalogue() {
            assert_eq!(scenario.adoption(2015, &d), scenario.adoption(2020, &d));
            assert_eq!(scenario.capability(2015, &d), scenario.capability(2020, &d));
        }
    }

    #[test]
    fn test_baseline_capability_doubles() {
        let d = drivers();
        assert_eq!(Scenario::Current.capability(2024, &d), 1.0);
        assert_eq!(Scenario::Current.capability(2025, &d), 2.0);
        assert_eq!(Scenario::Current.capability(2030, &d), 64.0);
        // Backward from the anchor, down to the epoch
        assert_eq!(Scenario::Current.capability(2022, &d), 0.25);
        assert_eq!(Scenario::Current.capability(2020, &d), 0.0625);
    }

    #[test]
    fn test_plateau_is_idempotent_freeze() {
        let d = drivers();
        let plateau = Scenario::CapabilityPlateau { year: 2026 };
        let frozen = plateau.capability(2026, &d);
        assert_eq!(frozen, 4.0);
        for year in 2026..=2040 {
            assert_eq!(plateau.capability(year, &d), frozen);
        }
        // Before the plateau it tracks the baseline
        assert_eq!(
            plateau.capability(2025, &d),
            Scenario::Current.capability(2025, &d)
        );
    }

    #[test]
    fn test_deceleration_tier_accumulation() {
        let d = drivers();
        let decel = Scenario::CapabilityDeceleration;
        // 2x, 2x, 1.5x, 1.5x, 1.2x, 1.2x, 1.1x...
        let expected = [
            (2024, 1.0),
            (2025, 2.0),
            (2026, 4.0),
            (2027, 6.0),
            (2028, 9.0),
            (2029, 10.8),
            (2030, 12.96),
            (2031, 14.256),
        ];
        for (year, want) in expected {
            let got = decel.capability(year, &d);
            assert!((got - want).abs() < 1e-9, "{}: {} != {}", year, got, want);
        }
        // Pre-reference years hold the reference value
        assert_eq!(decel.capability(2021, &d), 1.0);
    }

    #[test]
    fn test_adoption_variants_scale_cagr() {
        let d = drivers();
        let slow = Scenario::AdoptionSlowdown {
            factor: 0.5,
            ceiling: 0.70,
        };
        let fast = Scenario::AdoptionAcceleration {
            factor: 1.5,
            ceiling: 0.98,
        };
        let year = 2026;
        assert!(slow.adoption(year, &d) < Scenario::Current.adoption(year, &d));
        assert!(fast.adoption(year, &d) >= Scenario::Current.adoption(year, &d));
        // Ceilings hold
        assert_eq!(slow.adoption(2040, &d), 0.70);
        assert_eq!(fast.adoption(2040, &d), 0.98);
    }

    #[test]
    fn test_intervention_collapses_growth() {
        let d = drivers();
        let intervention = Scenario::Intervention {
            year: 2026,
            ceiling: 0.70,
        };
        // Tracks baseline growth through the intervention year
        assert_eq!(
            intervention.adoption(2026, &d),
            Scenario::Current.adoption(2026, &d)
        );
        // Afterward growth is 25%/yr, capped by the lower ceiling
        let at_2026 = intervention.adoption(2026, &d);
        let at_2027 = intervention.adoption(2027, &d);
        assert!((at_2027 - (at_2026 * 1.25).min(0.70)).abs() < 1e-12);
        assert_eq!(intervention.adoption(2035, &d), 0.70);
    }

    #[test]
    fn test_design_multiplier_gated_by_year() {
        let design = Scenario::DesignImprovement { year: 2026 };
        assert_eq!(design.design_multiplier(2025), 1.0);
        assert_eq!(design.design_multiplier(2026), 0.6);
        assert_eq!(design.design_multiplier(2030), 0.6);
        assert_eq!(Scenario::Current.design_multiplier(2030), 1.0);
    }

    #[test]
    fn test_misalignment_doubles_impact() {
        assert_eq!(Scenario::Misalignment.impact_multiplier(), 2.0);
        assert_eq!(Scenario::Current.impact_multiplier(), 1.0);
    }
}
