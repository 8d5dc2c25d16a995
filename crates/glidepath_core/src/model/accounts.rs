//! Account definitions
//!
//! Accounts are balances with a specific tax treatment, each owned
//! exclusively by one household member. Taxable accounts additionally
//! track a cost basis for capital gains purposes.

use serde::{Deserialize, Serialize};

use super::ids::AccountId;

/// Tax treatment for an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaxStatus {
    /// RRSP/RRIF - contributions reduce taxable income, withdrawals are
    /// fully taxed as ordinary income
    TaxDeferred,
    /// TFSA/FHSA - contributions are after-tax, withdrawals are never taxed
    TaxFree,
    /// Non-registered brokerage - only the gain portion of a withdrawal
    /// is taxable, at the inclusion rate
    Taxable,
}

/// Which household member owns an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Owner {
    Primary,
    Spouse,
}

/// A single account belonging to one household member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub name: String,
    pub owner: Owner,
    pub tax_status: TaxStatus,
    pub balance: f64,
    /// Non-gain (principal) portion of the balance. Only meaningful for
    /// `Taxable` accounts; ignored elsewhere.
    #[serde(default)]
    pub cost_basis: f64,
}

impl Account {
    pub fn is_tax_deferred(&self) -> bool {
        self.tax_status == TaxStatus::TaxDeferred
    }

    pub fn is_tax_free(&self) -> bool {
        self.tax_status == TaxStatus::TaxFree
    }

    pub fn is_taxable(&self) -> bool {
        self.tax_status == TaxStatus::Taxable
    }
}
