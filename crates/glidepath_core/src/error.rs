//! Caller-facing input validation
//!
//! The simulation itself is a pure numeric pipeline with no runtime
//! error taxonomy: degenerate input degrades to an empty ledger rather
//! than faulting. Callers that want to reject nonsensical plans before
//! running them can use `validate_inputs`.

use std::fmt;

use crate::model::{Assumptions, Profile};

/// Problems a caller should surface before running a simulation
#[derive(Debug, Clone)]
pub enum ConfigError {
    RetirementBeforeCurrentAge { current: u8, retirement: u8 },
    LifeExpectancyBeforeRetirement { retirement: u8, life_expectancy: u8 },
    NegativeRate { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RetirementBeforeCurrentAge { current, retirement } => {
                write!(f, "retirement age {retirement} is not after current age {current}")
            }
            ConfigError::LifeExpectancyBeforeRetirement {
                retirement,
                life_expectancy,
            } => {
                write!(
                    f,
                    "life expectancy {life_expectancy} is before retirement age {retirement}"
                )
            }
            ConfigError::NegativeRate { name, value } => {
                write!(f, "{name} must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reject configurations the simulator would silently degrade on.
/// Checks the spouse's age track too, one level deep.
pub fn validate_inputs(profile: &Profile, assumptions: &Assumptions) -> Result<(), ConfigError> {
    validate_ages(profile)?;
    if let Some(spouse) = &profile.spouse {
        validate_ages(spouse)?;
    }

    for (name, value) in [
        ("inflation_rate", assumptions.inflation_rate),
        ("safe_withdrawal_rate", assumptions.safe_withdrawal_rate),
        ("retirement_return_rate", assumptions.retirement_return_rate),
    ] {
        if value < 0.0 {
            return Err(ConfigError::NegativeRate { name, value });
        }
    }
    Ok(())
}

fn validate_ages(profile: &Profile) -> Result<(), ConfigError> {
    if profile.retirement_age <= profile.current_age {
        return Err(ConfigError::RetirementBeforeCurrentAge {
            current: profile.current_age,
            retirement: profile.retirement_age,
        });
    }
    if profile.life_expectancy < profile.retirement_age {
        return Err(ConfigError::LifeExpectancyBeforeRetirement {
            retirement: profile.retirement_age,
            life_expectancy: profile.life_expectancy,
        });
    }
    Ok(())
}
