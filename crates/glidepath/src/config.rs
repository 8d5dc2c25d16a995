//! Plan file loading
//!
//! A plan file is a JSON document holding the household's accounts,
//! profile, assumptions, and (optionally) planned annual contributions
//! for the accumulation phase. The account, profile, and assumption
//! shapes come straight from `glidepath_core`.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use glidepath_core::model::{Account, AccountId, Assumptions, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub accounts: Vec<Account>,
    pub profile: Profile,
    pub assumptions: Assumptions,
    /// Planned annual contributions per account, applied during the
    /// accumulation phase. When absent the plan retires on current
    /// balances.
    #[serde(default)]
    pub contributions: FxHashMap<AccountId, f64>,
    /// Return rate applied during accumulation. Defaults to the
    /// retirement return rate when unset.
    #[serde(default)]
    pub pre_retirement_return: Option<f64>,
}

impl PlanConfig {
    pub fn accumulation_return(&self) -> f64 {
        self.pre_retirement_return
            .unwrap_or(self.assumptions.retirement_return_rate)
    }
}

#[derive(Debug)]
pub enum PlanLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for PlanLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanLoadError::Io(e) => write!(f, "failed to read plan file: {e}"),
            PlanLoadError::Parse(e) => write!(f, "failed to parse plan file: {e}"),
        }
    }
}

impl std::error::Error for PlanLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanLoadError::Io(e) => Some(e),
            PlanLoadError::Parse(e) => Some(e),
        }
    }
}

pub fn load_plan(path: &Path) -> Result<PlanConfig, PlanLoadError> {
    let raw = fs::read_to_string(path).map_err(PlanLoadError::Io)?;
    serde_json::from_str(&raw).map_err(PlanLoadError::Parse)
}
