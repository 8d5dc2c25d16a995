//! Unique identifiers for simulation entities

use serde::{Deserialize, Serialize};

/// Unique identifier for an Account within a household plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u16);
