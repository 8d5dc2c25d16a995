//! Lifetime outcome aggregation
//!
//! Derives the scalar outcome figures from the year-by-year ledger and
//! the accumulation projection: lifetime taxes, sustainable withdrawal
//! amounts (real and nominal), and the depletion bookkeeping carried
//! through from the simulator.

use rustc_hash::FxHashMap;

use crate::model::{
    AccountId, AccumulationResult, Assumptions, RetirementResult, YearlyWithdrawal,
};

/// Fold the yearly ledger and depletion bookkeeping into a
/// `RetirementResult`. Pure summation and ratio derivation; nothing here
/// mutates simulation state.
pub fn aggregate_outcome(
    years: Vec<YearlyWithdrawal>,
    accumulation: &AccumulationResult,
    assumptions: &Assumptions,
    account_depletion_ages: FxHashMap<AccountId, u8>,
    depletion_age: Option<u8>,
) -> RetirementResult {
    let lifetime_taxes = years.iter().map(|y| y.total_tax).sum();
    let swr = assumptions.safe_withdrawal_rate;
    let sustainable_annual_real = accumulation.real_total_at_retirement * swr;
    let sustainable_annual_nominal = accumulation.total_at_retirement * swr;

    RetirementResult {
        years,
        depletion_age,
        lifetime_taxes,
        sustainable_annual_real,
        sustainable_monthly_real: sustainable_annual_real / 12.0,
        sustainable_annual_nominal,
        sustainable_monthly_nominal: sustainable_annual_nominal / 12.0,
        account_depletion_ages,
    }
}

/// Household effective tax rate for one year; zero when there was no
/// income, never NaN.
pub fn effective_tax_rate(total_tax: f64, gross_income: f64) -> f64 {
    if gross_income <= 0.0 {
        0.0
    } else {
        total_tax / gross_income
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustainable_withdrawal_figures() {
        let accumulation = AccumulationResult {
            final_balances: FxHashMap::default(),
            total_at_retirement: 1_000_000.0,
            real_total_at_retirement: 800_000.0,
        };
        let assumptions = Assumptions {
            inflation_rate: 0.02,
            safe_withdrawal_rate: 0.04,
            retirement_return_rate: 0.05,
            start_date: None,
        };
        let result = aggregate_outcome(
            Vec::new(),
            &accumulation,
            &assumptions,
            FxHashMap::default(),
            None,
        );
        assert!((result.sustainable_annual_real - 32_000.0).abs() < 1e-9);
        assert!((result.sustainable_monthly_real - 32_000.0 / 12.0).abs() < 1e-9);
        assert!((result.sustainable_annual_nominal - 40_000.0).abs() < 1e-9);
        assert!((result.sustainable_monthly_nominal - 40_000.0 / 12.0).abs() < 1e-9);
        assert_eq!(result.lifetime_taxes, 0.0);
    }

    #[test]
    fn test_effective_rate_guards_zero_income() {
        assert_eq!(effective_tax_rate(0.0, 0.0), 0.0);
        assert_eq!(effective_tax_rate(100.0, 0.0), 0.0);
        assert!((effective_tax_rate(25_000.0, 100_000.0) - 0.25).abs() < 1e-9);
    }
}
