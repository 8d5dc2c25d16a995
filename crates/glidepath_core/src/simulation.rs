//! Withdrawal-phase simulator
//!
//! A deterministic, path-dependent year loop from retirement age to
//! life expectancy. Each year satisfies mandatory minimums first, then
//! fills the lowest federal bracket from tax-deferred accounts, then
//! drains tax-free and taxable accounts, and only then returns to
//! tax-deferred money at whatever marginal rate results. Taxes are
//! assessed per household member on proportionally-allocated income.
//!
//! Two modeling simplifications are deliberate: the bracket-fill
//! ceiling uses aggregate household ordinary income against a
//! per-person allowance (doubled when a spouse exists, approximating
//! pension-splitting eligibility), and realized gains are split between
//! members by withdrawal share rather than per-lot attribution.

use rustc_hash::FxHashMap;

use crate::metrics::aggregate_outcome;
use crate::model::{
    Account, AccountId, AccumulationResult, Assumptions, Owner, Profile, RegionalTaxParams,
    RetirementResult, TaxParams, TaxStatus, YearlyWithdrawal,
};
use crate::simulation_state::WithdrawalState;
use crate::taxes::{federal_tax, regional_tax};

/// One household member's income picture for a single simulated year
#[derive(Debug, Clone, Copy)]
struct MemberYear {
    owner: Owner,
    /// This member's own simulated age (spouse tracks independently)
    age: i32,
    regional_rate: f64,
    fixed_income: f64,
    deferred_withdrawn: f64,
    taxable_withdrawn: f64,
}

fn member_year(profile: &Profile, owner: Owner, elapsed: i32, inflation_factor: f64) -> MemberYear {
    let age = i32::from(profile.current_age) + elapsed;
    let fixed_income = profile
        .benefit
        .filter(|b| age >= i32::from(b.start_age))
        .map_or(0.0, |b| b.annual_amount * inflation_factor);
    MemberYear {
        owner,
        age,
        regional_rate: profile.regional_rate,
        fixed_income,
        deferred_withdrawn: 0.0,
        taxable_withdrawn: 0.0,
    }
}

/// Simulate the decumulation phase for a household.
///
/// Operates on a working copy of the supplied accounts (seeded from the
/// accumulation projection where present); the caller's accounts are
/// never mutated. A degenerate horizon (life expectancy before
/// retirement age) yields an empty ledger rather than a fault.
pub fn simulate_withdrawals(
    accounts: &[Account],
    profile: &Profile,
    assumptions: &Assumptions,
    accumulation: &AccumulationResult,
    params: &TaxParams,
) -> RetirementResult {
    let mut state = WithdrawalState::new(accounts, accumulation);
    let mut years = Vec::with_capacity(profile.horizon_years() as usize);
    let mut target_spending =
        accumulation.total_at_retirement * assumptions.safe_withdrawal_rate;
    let anchor_year = assumptions.anchor_year();

    if profile.horizon_years() > 0 {
        for age in profile.retirement_age..=profile.life_expectancy {
            years.push(simulate_year(
                age,
                &mut state,
                profile,
                assumptions,
                params,
                target_spending,
                anchor_year,
            ));
            target_spending *= 1.0 + assumptions.inflation_rate;
        }
    }

    aggregate_outcome(
        years,
        accumulation,
        assumptions,
        state.account_depletion_ages,
        state.portfolio_depletion_age,
    )
}

#[allow(clippy::too_many_lines)]
fn simulate_year(
    age: u8,
    state: &mut WithdrawalState,
    profile: &Profile,
    assumptions: &Assumptions,
    params: &TaxParams,
    target_spending: f64,
    anchor_year: i16,
) -> YearlyWithdrawal {
    let elapsed = i32::from(age) - i32::from(profile.current_age);

    // Portfolio depletion is detected before this year's withdrawals and
    // recorded once; the loop still runs the full horizon.
    if state.total_remaining() <= 0.0 {
        state.note_portfolio_depletion(age);
    }

    let inflation_factor = (1.0 + assumptions.inflation_rate).powi(elapsed.max(0));

    let mut members = vec![member_year(profile, Owner::Primary, elapsed, inflation_factor)];
    if let Some(spouse) = &profile.spouse {
        members.push(member_year(spouse, Owner::Spouse, elapsed, inflation_factor));
    }

    let total_fixed: f64 = members.iter().map(|m| m.fixed_income).sum();
    let mut remaining_need = (target_spending - total_fixed).max(0.0);

    let mut withdrawals: FxHashMap<AccountId, f64> = state
        .accounts
        .iter()
        .map(|a| (a.account_id, 0.0))
        .collect();

    // Mandatory minimums use each member's own age against their own
    // tax-deferred pool.
    let mandatory_total: f64 = members
        .iter()
        .map(|m| {
            let pool = state.deferred_pool(m.owner);
            params.rrif.minimum_for(m.age.clamp(0, 255) as u8, pool)
        })
        .sum();

    // Step 1: compulsory minimum withdrawal, natural account order,
    // capped per account. Executes even when the spending need is
    // already met; the excess only raises taxable income.
    let mut mandatory_remaining = mandatory_total;
    for account in state
        .accounts
        .iter_mut()
        .filter(|a| a.tax_status == TaxStatus::TaxDeferred)
    {
        if mandatory_remaining <= 0.0 {
            break;
        }
        let taken = account.withdraw(mandatory_remaining);
        mandatory_remaining -= taken;
        *withdrawals.entry(account.account_id).or_insert(0.0) += taken;
        if let Some(m) = members.iter_mut().find(|m| m.owner == account.owner) {
            m.deferred_withdrawn += taken;
        }
        remaining_need = (remaining_need - taken).max(0.0);
    }

    // Step 2: fill the lowest federal bracket from tax-deferred money.
    // Aggregate household ordinary income against a per-person allowance,
    // doubled when a spouse exists.
    let ceiling = params.federal.lowest_bracket_ceiling()
        * if profile.spouse.is_some() { 2.0 } else { 1.0 };
    let mut household_ordinary: f64 =
        total_fixed + members.iter().map(|m| m.deferred_withdrawn).sum::<f64>();
    for account in state
        .accounts
        .iter_mut()
        .filter(|a| a.tax_status == TaxStatus::TaxDeferred)
    {
        if remaining_need <= 0.0 {
            break;
        }
        let room = ceiling - household_ordinary;
        if room <= 0.0 {
            break;
        }
        let taken = account.withdraw(room.min(remaining_need));
        household_ordinary += taken;
        *withdrawals.entry(account.account_id).or_insert(0.0) += taken;
        if let Some(m) = members.iter_mut().find(|m| m.owner == account.owner) {
            m.deferred_withdrawn += taken;
        }
        remaining_need = (remaining_need - taken).max(0.0);
    }

    // Step 3: tax-free accounts.
    for account in state
        .accounts
        .iter_mut()
        .filter(|a| a.tax_status == TaxStatus::TaxFree)
    {
        if remaining_need <= 0.0 {
            break;
        }
        let taken = account.withdraw(remaining_need);
        *withdrawals.entry(account.account_id).or_insert(0.0) += taken;
        remaining_need = (remaining_need - taken).max(0.0);
    }

    // Step 4: taxable accounts, tracking realized gains and shrinking
    // cost bases as balances shrink.
    let mut realized_gains = 0.0;
    for account in state
        .accounts
        .iter_mut()
        .filter(|a| a.tax_status == TaxStatus::Taxable)
    {
        if remaining_need <= 0.0 {
            break;
        }
        let (taken, gain) = account.withdraw_taxable(remaining_need);
        realized_gains += gain;
        *withdrawals.entry(account.account_id).or_insert(0.0) += taken;
        if let Some(m) = members.iter_mut().find(|m| m.owner == account.owner) {
            m.taxable_withdrawn += taken;
        }
        remaining_need = (remaining_need - taken).max(0.0);
    }

    // Step 5: overflow back into tax-deferred money, no bracket
    // constraint; this income is taxed at whatever rate results.
    for account in state
        .accounts
        .iter_mut()
        .filter(|a| a.tax_status == TaxStatus::TaxDeferred)
    {
        if remaining_need <= 0.0 {
            break;
        }
        let taken = account.withdraw(remaining_need);
        *withdrawals.entry(account.account_id).or_insert(0.0) += taken;
        if let Some(m) = members.iter_mut().find(|m| m.owner == account.owner) {
            m.deferred_withdrawn += taken;
        }
        remaining_need = (remaining_need - taken).max(0.0);
    }

    state.record_depletions(age);

    // Returns apply to post-withdrawal balances.
    state.apply_growth(assumptions.retirement_return_rate);

    // Per-member taxes on proportionally-allocated income.
    let total_taxable_withdrawn: f64 = members.iter().map(|m| m.taxable_withdrawn).sum();
    let mut federal_total = 0.0;
    let mut provincial_total = 0.0;
    for m in &members {
        let gain_share = if total_taxable_withdrawn > 0.0 {
            realized_gains * m.taxable_withdrawn / total_taxable_withdrawn
        } else {
            0.0
        };
        let ordinary = m.deferred_withdrawn + m.fixed_income;
        federal_total += federal_tax(ordinary, gain_share, &params.federal);
        provincial_total += if m.regional_rate > 0.0 {
            regional_tax(ordinary, gain_share, &RegionalTaxParams::flat(m.regional_rate))
        } else {
            regional_tax(ordinary, gain_share, &params.regional)
        };
    }

    let total_withdrawal: f64 = withdrawals.values().sum();
    let gross_income = total_withdrawal + total_fixed;
    let total_tax = federal_total + provincial_total;
    let balances: FxHashMap<AccountId, f64> = state
        .accounts
        .iter()
        .map(|a| (a.account_id, a.balance))
        .collect();

    YearlyWithdrawal {
        age,
        calendar_year: (i32::from(anchor_year) + elapsed) as i16,
        withdrawals,
        balances,
        total_withdrawal,
        fixed_income: total_fixed,
        gross_income,
        federal_tax: federal_total,
        provincial_tax: provincial_total,
        total_tax,
        after_tax_income: gross_income - total_tax,
        target_spending,
        mandatory_minimum: mandatory_total,
        total_remaining: state.total_remaining(),
    }
}
