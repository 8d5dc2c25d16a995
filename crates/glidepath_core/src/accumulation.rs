//! Accumulation-phase projector
//!
//! Simple deterministic compounding from the household's current ages
//! to retirement: each year every balance grows at the pre-retirement
//! return rate, then receives its annual contribution capped at the
//! versioned limit for its category. Taxable contributions add to cost
//! basis. The withdrawal simulator consumes the output opaquely.

use rustc_hash::FxHashMap;

use crate::model::{
    Account, AccountId, AccountProjection, AccumulationResult, Assumptions, Profile, TaxParams,
    TaxStatus,
};

/// Project current balances forward to retirement.
///
/// `contributions` maps accounts to planned annual contributions;
/// accounts without an entry just compound. A degenerate accumulation
/// window (retirement at or before the current age) returns the
/// balances as they stand.
pub fn project_to_retirement(
    accounts: &[Account],
    profile: &Profile,
    assumptions: &Assumptions,
    contributions: &FxHashMap<AccountId, f64>,
    pre_retirement_return: f64,
    params: &TaxParams,
) -> AccumulationResult {
    let years = i32::from(profile.retirement_age)
        .saturating_sub(i32::from(profile.current_age))
        .max(0);

    let mut final_balances: FxHashMap<AccountId, AccountProjection> = FxHashMap::default();
    for account in accounts {
        let contribution = capped_contribution(
            contributions.get(&account.account_id).copied().unwrap_or(0.0),
            account.tax_status,
            params,
        );

        let mut balance = account.balance;
        let mut cost_basis = account.cost_basis;
        for _ in 0..years {
            balance = balance * (1.0 + pre_retirement_return) + contribution;
            if account.tax_status == TaxStatus::Taxable {
                cost_basis += contribution;
            }
        }
        final_balances.insert(account.account_id, AccountProjection { balance, cost_basis });
    }

    let total: f64 = final_balances.values().map(|p| p.balance).sum();
    let real_total = total / (1.0 + assumptions.inflation_rate).powi(years);

    AccumulationResult {
        final_balances,
        total_at_retirement: total,
        real_total_at_retirement: real_total,
    }
}

fn capped_contribution(requested: f64, tax_status: TaxStatus, params: &TaxParams) -> f64 {
    let requested = requested.max(0.0);
    match tax_status {
        TaxStatus::TaxDeferred => requested.min(params.limits.tax_deferred_annual),
        TaxStatus::TaxFree => requested.min(params.limits.tax_free_annual),
        TaxStatus::Taxable => requested,
    }
}
