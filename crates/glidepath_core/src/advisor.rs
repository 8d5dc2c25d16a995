//! Contribution-limit advisor
//!
//! Budget-constrained suggestion of how to split annual savings across
//! account categories. Tax-deferred contributions are worth the most
//! while they shelter income taxed above the lowest bracket rate, so
//! that slice is bounded by both the contribution limit and the income
//! sitting above the first bracket; tax-free room comes next, and any
//! remainder lands in a taxable account. Consumes the tax engine only;
//! withdrawal logic is untouched.

use serde::{Deserialize, Serialize};

use crate::model::TaxParams;
use crate::taxes::marginal_rate;

/// Suggested split of one year's savings budget
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SavingsAllocation {
    pub tax_deferred: f64,
    pub tax_free: f64,
    pub taxable: f64,
}

impl SavingsAllocation {
    pub fn total(&self) -> f64 {
        self.tax_deferred + self.tax_free + self.taxable
    }
}

/// Suggest a per-category allocation of `annual_budget` for a person
/// earning `ordinary_income`, under the given year's limits.
pub fn suggest_allocation(
    annual_budget: f64,
    ordinary_income: f64,
    params: &TaxParams,
) -> SavingsAllocation {
    if annual_budget <= 0.0 {
        return SavingsAllocation::default();
    }

    let mut remaining = annual_budget;
    let mut allocation = SavingsAllocation::default();

    // Deferring only pays while income is taxed above the lowest rate.
    if marginal_rate(ordinary_income, &params.federal.brackets) > params.federal.lowest_rate() {
        let sheltered_income =
            (ordinary_income - params.federal.lowest_bracket_ceiling()).max(0.0);
        allocation.tax_deferred = remaining
            .min(params.limits.tax_deferred_annual)
            .min(sheltered_income);
        remaining -= allocation.tax_deferred;
    }

    allocation.tax_free = remaining.min(params.limits.tax_free_annual);
    remaining -= allocation.tax_free;

    allocation.taxable = remaining;
    allocation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_conserves_budget() {
        let params = TaxParams::year_2024();
        for budget in [0.0, 5_000.0, 30_000.0, 100_000.0] {
            let allocation = suggest_allocation(budget, 80_000.0, &params);
            assert!((allocation.total() - budget).abs() < 1e-9);
            assert!(allocation.tax_deferred >= 0.0);
            assert!(allocation.tax_free >= 0.0);
            assert!(allocation.taxable >= 0.0);
        }
    }

    #[test]
    fn test_deferred_bounded_by_income_above_first_bracket() {
        let params = TaxParams::year_2024();
        let allocation = suggest_allocation(30_000.0, 80_000.0, &params);
        let above_bracket = 80_000.0 - params.federal.lowest_bracket_ceiling();
        assert!((allocation.tax_deferred - above_bracket).abs() < 0.01);
        assert!((allocation.tax_free - (30_000.0 - above_bracket)).abs() < 0.01);
        assert_eq!(allocation.taxable, 0.0);
    }

    #[test]
    fn test_low_income_skips_deferred() {
        let params = TaxParams::year_2024();
        let allocation = suggest_allocation(10_000.0, 40_000.0, &params);
        assert_eq!(allocation.tax_deferred, 0.0);
        assert!((allocation.tax_free - params.limits.tax_free_annual).abs() < 1e-9);
        assert!((allocation.taxable - (10_000.0 - params.limits.tax_free_annual)).abs() < 1e-9);
    }

    #[test]
    fn test_deferred_capped_at_limit() {
        let params = TaxParams::year_2024();
        let allocation = suggest_allocation(60_000.0, 300_000.0, &params);
        assert!((allocation.tax_deferred - params.limits.tax_deferred_annual).abs() < 1e-9);
    }
}
