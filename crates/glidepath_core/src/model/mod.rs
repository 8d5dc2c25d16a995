mod accounts;
mod ids;
mod profile;
mod results;
mod rrif;
mod tax_params;

pub use accounts::{Account, Owner, TaxStatus};
pub use ids::AccountId;
pub use profile::{Assumptions, FixedBenefit, Profile};
pub use results::{AccountProjection, AccumulationResult, RetirementResult, YearlyWithdrawal};
pub use rrif::{RrifFactor, RrifMinimumTable, compute_mandatory_minimum};
pub use tax_params::{
    ContributionLimits, FederalTaxParams, PremiumBand, RegionalTaxParams, Surtax, TaxBracket,
    TaxParams,
};
