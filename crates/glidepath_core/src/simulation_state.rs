//! Working state for one withdrawal simulation
//!
//! Each simulation call owns a private copy of every account's balance
//! and cost basis, built from the caller's accounts and the
//! accumulation projection. Caller-owned accounts are never mutated;
//! the working state lives for exactly one invocation.

use rustc_hash::FxHashMap;

use crate::model::{Account, AccountId, AccumulationResult, Owner, TaxStatus};

/// Mutable per-account working copy, in the caller's input order
#[derive(Debug, Clone)]
pub struct WorkingAccount {
    pub account_id: AccountId,
    pub owner: Owner,
    pub tax_status: TaxStatus,
    pub balance: f64,
    pub cost_basis: f64,
}

impl WorkingAccount {
    /// Withdraw up to `amount`, capped at the current balance. Returns
    /// the amount actually taken.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        let taken = amount.max(0.0).min(self.balance.max(0.0));
        self.balance -= taken;
        taken
    }

    /// Realized-gain fraction of the next dollar withdrawn. Point-in-time
    /// estimate, not lot-based; falls back to 0.5 when the balance is
    /// zero and basis bookkeeping is meaningless.
    pub fn gain_ratio(&self) -> f64 {
        if self.balance <= 0.0 {
            return 0.5;
        }
        (1.0 - self.cost_basis / self.balance).max(0.0)
    }

    /// Withdraw from a taxable account, shrinking the cost basis by the
    /// same fraction the balance shrank. Returns (taken, realized gain).
    pub fn withdraw_taxable(&mut self, amount: f64) -> (f64, f64) {
        let before = self.balance;
        let ratio = self.gain_ratio();
        let taken = self.withdraw(amount);
        if taken <= 0.0 {
            return (0.0, 0.0);
        }
        if self.balance <= 0.0 {
            self.cost_basis = 0.0;
        } else {
            self.cost_basis *= self.balance / before;
        }
        (taken, taken * ratio)
    }
}

/// Arena-style state threaded through the per-year step function
#[derive(Debug, Clone)]
pub struct WithdrawalState {
    pub accounts: Vec<WorkingAccount>,
    pub account_depletion_ages: FxHashMap<AccountId, u8>,
    pub portfolio_depletion_age: Option<u8>,
}

impl WithdrawalState {
    /// Build the working copy. Balances and cost bases come from the
    /// accumulation projection where present, falling back to the
    /// account's own figures.
    pub fn new(accounts: &[Account], accumulation: &AccumulationResult) -> Self {
        let accounts = accounts
            .iter()
            .map(|a| {
                let projection = accumulation.projection_for(a.account_id);
                WorkingAccount {
                    account_id: a.account_id,
                    owner: a.owner,
                    tax_status: a.tax_status,
                    balance: projection.map_or(a.balance, |p| p.balance),
                    cost_basis: projection.map_or(a.cost_basis, |p| p.cost_basis),
                }
            })
            .collect();
        WithdrawalState {
            accounts,
            account_depletion_ages: FxHashMap::default(),
            portfolio_depletion_age: None,
        }
    }

    pub fn total_remaining(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Sum of tax-deferred balances owned by one person
    pub fn deferred_pool(&self, owner: Owner) -> f64 {
        self.accounts
            .iter()
            .filter(|a| a.owner == owner && a.tax_status == TaxStatus::TaxDeferred)
            .map(|a| a.balance)
            .sum()
    }

    /// Apply the year's investment return to every post-withdrawal balance
    pub fn apply_growth(&mut self, rate: f64) {
        for account in &mut self.accounts {
            account.balance *= 1.0 + rate;
        }
    }

    /// Record the first age each account's balance reached zero.
    /// Idempotent; an age once set is never overwritten.
    pub fn record_depletions(&mut self, age: u8) {
        for account in &self.accounts {
            if account.balance <= 0.0 {
                self.account_depletion_ages
                    .entry(account.account_id)
                    .or_insert(age);
            }
        }
    }

    /// Record the first age the whole portfolio was empty at year start
    pub fn note_portfolio_depletion(&mut self, age: u8) {
        if self.portfolio_depletion_age.is_none() {
            self.portfolio_depletion_age = Some(age);
        }
    }
}
