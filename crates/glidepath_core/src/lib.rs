//! Household retirement projection library
//!
//! This crate projects a household's retirement finances in two phases:
//! deterministic compound accumulation, then a year-by-year withdrawal
//! simulation with a tax-aware ordering policy. It supports:
//! - Three account categories (tax-deferred, tax-free, taxable) with
//!   cost-basis tracking through partial liquidations
//! - RRIF-style mandatory minimum distributions from an age-indexed
//!   factor table
//! - Progressive federal + provincial tax with credits, stacked
//!   surtaxes, and a stepped health premium, on versioned yearly tables
//! - Lowest-bracket filling before tax-sheltered money is touched
//! - Independent spouse age tracks with proportional income allocation
//! - Lifetime outcome aggregation and parallel what-if comparison
//!
//! ```ignore
//! use glidepath_core::model::{AccumulationResult, TaxParams};
//! use glidepath_core::simulation::simulate_withdrawals;
//!
//! let accumulation = AccumulationResult::from_current_balances(&accounts);
//! let params = TaxParams::year_2024();
//! let result = simulate_withdrawals(&accounts, &profile, &assumptions, &accumulation, &params);
//! println!("lifetime taxes: {}", result.lifetime_taxes);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod accumulation;
pub mod advisor;
pub mod error;
pub mod metrics;
pub mod scenario;
pub mod simulation;
pub mod simulation_state;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ConfigError, validate_inputs};
pub use model::{TaxParams, compute_mandatory_minimum};
pub use simulation::simulate_withdrawals;
pub use taxes::{compute_national_tax, compute_regional_tax};
