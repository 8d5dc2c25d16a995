//! Integration tests for the glidepath simulation engine
//!
//! Tests are organized by topic:
//! - `rrif` - Mandatory minimum distribution factors and amounts
//! - `withdrawal` - Withdrawal ordering policy, taxes, and ledger shape
//! - `accumulation` - Accumulation-phase compounding and limit caps
//! - `scenario` - Batch runner ordering and equivalence to single runs
//!
//! Tax-engine unit tests live beside the code in `taxes.rs`,
//! working-state mechanics in `simulation_state.rs`, and input
//! validation in `error.rs`, matching where those behaviors are
//! implemented.

mod scenario;
