//! Household member profiles and plan-wide assumptions

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A fixed government or employer benefit (CPP/OAS style), indexed to
/// inflation and gated on the member reaching its start age.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixedBenefit {
    pub annual_amount: f64,
    pub start_age: u8,
}

/// Per-person attributes for the household plan.
///
/// A spouse, when present, carries an independent age track and benefit
/// parameters and is taxed as a separate individual. Spouse profiles do
/// not nest further; a spouse's own `spouse` field is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub current_age: u8,
    pub retirement_age: u8,
    pub life_expectancy: u8,
    /// Flat provincial-rate approximation for this person. Zero selects
    /// the full provincial bracket table instead.
    #[serde(default)]
    pub regional_rate: f64,
    #[serde(default)]
    pub benefit: Option<FixedBenefit>,
    #[serde(default)]
    pub spouse: Option<Box<Profile>>,
}

impl Profile {
    /// Number of simulated retirement years (closed interval), zero for
    /// a degenerate horizon.
    pub fn horizon_years(&self) -> u32 {
        if self.life_expectancy < self.retirement_age {
            return 0;
        }
        u32::from(self.life_expectancy - self.retirement_age) + 1
    }
}

/// Deterministic plan-wide rates, constant across the whole horizon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assumptions {
    /// Per-annum inflation applied to spending targets and benefits
    pub inflation_rate: f64,
    /// Fraction of the retirement portfolio assumed safe to draw each year
    pub safe_withdrawal_rate: f64,
    /// Per-annum portfolio return during retirement
    pub retirement_return_rate: f64,
    /// Anchors calendar years in the yearly ledger; the plan's first year
    /// (at `current_age`) falls in this date's year.
    #[serde(default)]
    pub start_date: Option<Date>,
}

impl Assumptions {
    /// Calendar year of the plan's first year, defaulting when no start
    /// date was supplied.
    pub fn anchor_year(&self) -> i16 {
        self.start_date.map_or(2025, |d| d.year())
    }
}
