//! Simulation results
//!
//! Output types for the accumulation projector and the withdrawal
//! simulator: the immutable per-year ledger and the derived lifetime
//! outcome figures.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::accounts::Account;
use super::ids::AccountId;

/// Projected balance and cost basis of one account at retirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccountProjection {
    pub balance: f64,
    pub cost_basis: f64,
}

/// Output of the accumulation projector, consumed opaquely by the
/// withdrawal simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulationResult {
    pub final_balances: FxHashMap<AccountId, AccountProjection>,
    /// Nominal total portfolio value entering retirement
    pub total_at_retirement: f64,
    /// Inflation-discounted total portfolio value entering retirement
    pub real_total_at_retirement: f64,
}

impl AccumulationResult {
    /// Identity projection for a household retiring on current balances
    /// (no accumulation phase).
    #[must_use]
    pub fn from_current_balances(accounts: &[Account]) -> Self {
        let final_balances: FxHashMap<AccountId, AccountProjection> = accounts
            .iter()
            .map(|a| {
                (
                    a.account_id,
                    AccountProjection {
                        balance: a.balance,
                        cost_basis: a.cost_basis,
                    },
                )
            })
            .collect();
        let total: f64 = final_balances.values().map(|p| p.balance).sum();
        AccumulationResult {
            final_balances,
            total_at_retirement: total,
            real_total_at_retirement: total,
        }
    }

    pub fn projection_for(&self, account_id: AccountId) -> Option<AccountProjection> {
        self.final_balances.get(&account_id).copied()
    }
}

/// Immutable snapshot of one simulated retirement year. Produced once
/// per year, appended to the ledger, never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyWithdrawal {
    pub age: u8,
    pub calendar_year: i16,
    /// Gross withdrawal per account this year (all accounts present)
    pub withdrawals: FxHashMap<AccountId, f64>,
    /// End-of-year balances per account, after growth
    pub balances: FxHashMap<AccountId, f64>,
    pub total_withdrawal: f64,
    pub fixed_income: f64,
    pub gross_income: f64,
    pub federal_tax: f64,
    pub provincial_tax: f64,
    pub total_tax: f64,
    pub after_tax_income: f64,
    pub target_spending: f64,
    pub mandatory_minimum: f64,
    pub total_remaining: f64,
}

/// Full outcome of one withdrawal simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Ordered year-by-year ledger, retirement age through life expectancy
    pub years: Vec<YearlyWithdrawal>,
    /// First age at which the whole portfolio reached zero, if ever
    pub depletion_age: Option<u8>,
    /// Sum of all taxes paid over the horizon
    pub lifetime_taxes: f64,
    pub sustainable_annual_real: f64,
    pub sustainable_monthly_real: f64,
    pub sustainable_annual_nominal: f64,
    pub sustainable_monthly_nominal: f64,
    /// First age each individual account reached zero
    pub account_depletion_ages: FxHashMap<AccountId, u8>,
}
