//! ═══════════════════════════════════════════════════════════════════════════════
//! ERROR — Unified Error Type for Cogwatch
//! ═══════════════════════════════════════════════════════════════════════════════
//! Centralized error handling. No scattered .unwrap() or .expect() calls.
//! All errors are raised synchronously at the point of detection; a failed
//! run produces no trajectory at all, never a truncated one.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::fmt;

/// The unified error type for the Cogwatch crate
#[derive(Debug, Clone)]
pub enum CogwatchError {
    /// Configuration error (invalid year range, bad calibration values)
    Config(ConfigError),
    /// Scenario identifier not in the closed catalogue
    UnknownScenario(UnknownScenarioError),
    /// Validation error (observed year missing from a trajectory)
    Validation(ValidationError),
}

impl std::error::Error for CogwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CogwatchError::Config(e) => Some(e),
            CogwatchError::UnknownScenario(e) => Some(e),
            CogwatchError::Validation(e) => Some(e),
        }
    }
}

impl fmt::Display for CogwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CogwatchError::Config(e) => write!(f, "Configuration error: {}", e),
            CogwatchError::UnknownScenario(e) => write!(f, "Unknown scenario: {}", e),
            CogwatchError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// end_year precedes start_year
    InvalidYearRange { start_year: i32, end_year: i32 },
    /// Year falls before the simulation epoch (2020)
    YearBeforeEpoch { year: i32, epoch: i32 },
    /// Calibration value out of its physically meaningful range
    InvalidValue { field: &'static str, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidYearRange {
                start_year,
                end_year,
            } => {
                write!(
                    f,
                    "end_year {} precedes start_year {}",
                    end_year, start_year
                )
            }
            ConfigError::YearBeforeEpoch { year, epoch } => {
                write!(f, "year {} precedes the simulation epoch {}", year, epoch)
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "invalid value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CogwatchError {
    fn from(err: ConfigError) -> Self {
        CogwatchError::Config(err)
    }
}

/// Scenario key not in the closed catalogue. Never silently defaulted.
#[derive(Debug, Clone)]
pub struct UnknownScenarioError {
    /// The offending key as given by the caller
    pub key: String,
}

impl fmt::Display for UnknownScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario key '{}' is not in the catalogue", self.key)
    }
}

impl std::error::Error for UnknownScenarioError {}

impl From<UnknownScenarioError> for CogwatchError {
    fn from(err: UnknownScenarioError) -> Self {
        CogwatchError::UnknownScenario(err)
    }
}

/// Validation-specific errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// An observed comparison year is absent from the produced trajectory.
    /// Silent skipping would hide a mismatch between the simulated range
    /// and the validation window.
    MissingYear { year: i32 },
    /// No observed points were supplied
    NoObservations,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingYear { year } => {
                write!(f, "observed year {} is absent from the trajectory", year)
            }
            ValidationError::NoObservations => write!(f, "no observed points supplied"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CogwatchError {
    fn from(err: ValidationError) -> Self {
        CogwatchError::Validation(err)
    }
}

/// Type alias for Result with CogwatchError
pub type CogwatchResult<T> = Result<T, CogwatchError>;
