//! What-if scenario comparison
//!
//! Each scenario owns a fresh copy of its inputs, and every simulation
//! call builds its own working state, so scenarios can run in parallel
//! with no locking discipline. The `parallel` feature (default) fans
//! out over rayon; without it the runner degrades to a serial loop.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::model::{Account, AccumulationResult, Assumptions, Profile, RetirementResult, TaxParams};
use crate::simulation::simulate_withdrawals;

/// One independently-owned input set for a withdrawal simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub accounts: Vec<Account>,
    pub profile: Profile,
    pub assumptions: Assumptions,
    pub accumulation: AccumulationResult,
}

impl Scenario {
    pub fn run(&self, params: &TaxParams) -> RetirementResult {
        simulate_withdrawals(
            &self.accounts,
            &self.profile,
            &self.assumptions,
            &self.accumulation,
            params,
        )
    }
}

/// Run every scenario, preserving input order in the output.
#[cfg(feature = "parallel")]
pub fn run_scenarios(scenarios: &[Scenario], params: &TaxParams) -> Vec<RetirementResult> {
    scenarios.par_iter().map(|s| s.run(params)).collect()
}

/// Run every scenario, preserving input order in the output.
#[cfg(not(feature = "parallel"))]
pub fn run_scenarios(scenarios: &[Scenario], params: &TaxParams) -> Vec<RetirementResult> {
    scenarios.iter().map(|s| s.run(params)).collect()
}
