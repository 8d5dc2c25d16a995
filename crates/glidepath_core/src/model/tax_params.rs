//! Versioned tax tables and contribution limits
//!
//! Bracket tables, exemption amounts, and contribution limits are tied
//! to a specific tax year. The active year is an explicit configuration
//! input everywhere; nothing here is a compile-time constant, so test
//! fixtures and runtime tables cannot silently drift apart.

use serde::{Deserialize, Serialize};

use super::rrif::RrifMinimumTable;

/// One marginal bracket: income in `(lower, upper]` is taxed at `rate`.
/// Tables are ascending and non-overlapping; the final bracket is
/// unbounded (`upper = f64::INFINITY`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: f64,
    pub upper: f64,
    pub rate: f64,
}

impl TaxBracket {
    pub fn width(&self) -> f64 {
        (self.upper - self.lower).max(0.0)
    }
}

/// Federal (national) tax parameters for one tax year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederalTaxParams {
    pub brackets: Vec<TaxBracket>,
    /// Basic personal amount; the credit equals this times the lowest rate
    pub basic_personal_amount: f64,
    /// Fraction of capital gains included in taxable income
    pub capital_gains_inclusion: f64,
}

impl FederalTaxParams {
    /// Upper bound of the lowest bracket, the per-person bracket-fill ceiling
    pub fn lowest_bracket_ceiling(&self) -> f64 {
        self.brackets.first().map_or(0.0, |b| b.upper)
    }

    pub fn lowest_rate(&self) -> f64 {
        self.brackets.first().map_or(0.0, |b| b.rate)
    }
}

/// One surtax layer: adds `rate` times the portion of basic regional tax
/// above `threshold`. Layers are evaluated independently and stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surtax {
    pub threshold: f64,
    pub rate: f64,
}

/// One health-premium band: taxable income above `income_over` owes at
/// least `amount`. Bands are ascending; the highest band entered wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PremiumBand {
    pub income_over: f64,
    pub amount: f64,
}

/// Provincial (regional) tax parameters for one tax year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalTaxParams {
    pub brackets: Vec<TaxBracket>,
    pub basic_personal_amount: f64,
    pub capital_gains_inclusion: f64,
    pub surtaxes: Vec<Surtax>,
    pub premium_bands: Vec<PremiumBand>,
}

impl RegionalTaxParams {
    pub fn lowest_rate(&self) -> f64 {
        self.brackets.first().map_or(0.0, |b| b.rate)
    }

    /// Express a flat-rate provincial approximation through the same
    /// bracket machinery: one unbounded bracket, no credit, no surtax,
    /// no premium.
    #[must_use]
    pub fn flat(rate: f64) -> Self {
        RegionalTaxParams {
            brackets: vec![TaxBracket {
                lower: 0.0,
                upper: f64::INFINITY,
                rate,
            }],
            basic_personal_amount: 0.0,
            capital_gains_inclusion: 0.5,
            surtaxes: Vec::new(),
            premium_bands: Vec::new(),
        }
    }
}

/// Annual contribution room per account category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContributionLimits {
    pub tax_deferred_annual: f64,
    pub tax_free_annual: f64,
}

/// Complete parameter set for one tax year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxParams {
    pub federal: FederalTaxParams,
    pub regional: RegionalTaxParams,
    pub limits: ContributionLimits,
    pub rrif: RrifMinimumTable,
}

impl TaxParams {
    /// Canada federal + Ontario, 2024 tax year
    #[must_use]
    pub fn year_2024() -> Self {
        TaxParams {
            federal: FederalTaxParams {
                brackets: vec![
                    TaxBracket { lower: 0.0, upper: 55_867.0, rate: 0.15 },
                    TaxBracket { lower: 55_867.0, upper: 111_733.0, rate: 0.205 },
                    TaxBracket { lower: 111_733.0, upper: 173_205.0, rate: 0.26 },
                    TaxBracket { lower: 173_205.0, upper: 246_752.0, rate: 0.29 },
                    TaxBracket { lower: 246_752.0, upper: f64::INFINITY, rate: 0.33 },
                ],
                basic_personal_amount: 15_705.0,
                capital_gains_inclusion: 0.5,
            },
            regional: RegionalTaxParams {
                brackets: vec![
                    TaxBracket { lower: 0.0, upper: 51_446.0, rate: 0.0505 },
                    TaxBracket { lower: 51_446.0, upper: 102_894.0, rate: 0.0915 },
                    TaxBracket { lower: 102_894.0, upper: 150_000.0, rate: 0.1116 },
                    TaxBracket { lower: 150_000.0, upper: 220_000.0, rate: 0.1216 },
                    TaxBracket { lower: 220_000.0, upper: f64::INFINITY, rate: 0.1316 },
                ],
                basic_personal_amount: 12_399.0,
                capital_gains_inclusion: 0.5,
                surtaxes: vec![
                    Surtax { threshold: 5_554.0, rate: 0.20 },
                    Surtax { threshold: 7_108.0, rate: 0.36 },
                ],
                premium_bands: vec![
                    PremiumBand { income_over: 20_000.0, amount: 300.0 },
                    PremiumBand { income_over: 36_000.0, amount: 450.0 },
                    PremiumBand { income_over: 48_000.0, amount: 600.0 },
                    PremiumBand { income_over: 72_000.0, amount: 750.0 },
                    PremiumBand { income_over: 200_000.0, amount: 900.0 },
                ],
            },
            limits: ContributionLimits {
                tax_deferred_annual: 31_560.0,
                tax_free_annual: 7_000.0,
            },
            rrif: RrifMinimumTable::canada_2024(),
        }
    }

    /// Canada federal + Ontario, 2023 tax year
    #[must_use]
    pub fn year_2023() -> Self {
        TaxParams {
            federal: FederalTaxParams {
                brackets: vec![
                    TaxBracket { lower: 0.0, upper: 53_359.0, rate: 0.15 },
                    TaxBracket { lower: 53_359.0, upper: 106_717.0, rate: 0.205 },
                    TaxBracket { lower: 106_717.0, upper: 165_430.0, rate: 0.26 },
                    TaxBracket { lower: 165_430.0, upper: 235_675.0, rate: 0.29 },
                    TaxBracket { lower: 235_675.0, upper: f64::INFINITY, rate: 0.33 },
                ],
                basic_personal_amount: 15_000.0,
                capital_gains_inclusion: 0.5,
            },
            regional: RegionalTaxParams {
                brackets: vec![
                    TaxBracket { lower: 0.0, upper: 49_231.0, rate: 0.0505 },
                    TaxBracket { lower: 49_231.0, upper: 98_463.0, rate: 0.0915 },
                    TaxBracket { lower: 98_463.0, upper: 150_000.0, rate: 0.1116 },
                    TaxBracket { lower: 150_000.0, upper: 220_000.0, rate: 0.1216 },
                    TaxBracket { lower: 220_000.0, upper: f64::INFINITY, rate: 0.1316 },
                ],
                basic_personal_amount: 11_865.0,
                capital_gains_inclusion: 0.5,
                surtaxes: vec![
                    Surtax { threshold: 5_315.0, rate: 0.20 },
                    Surtax { threshold: 6_802.0, rate: 0.36 },
                ],
                premium_bands: vec![
                    PremiumBand { income_over: 20_000.0, amount: 300.0 },
                    PremiumBand { income_over: 36_000.0, amount: 450.0 },
                    PremiumBand { income_over: 48_000.0, amount: 600.0 },
                    PremiumBand { income_over: 72_000.0, amount: 750.0 },
                    PremiumBand { income_over: 200_000.0, amount: 900.0 },
                ],
            },
            limits: ContributionLimits {
                tax_deferred_annual: 30_780.0,
                tax_free_annual: 6_500.0,
            },
            rrif: RrifMinimumTable::canada_2024(),
        }
    }
}
