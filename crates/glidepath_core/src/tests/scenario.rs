//! Scenario runner tests

use crate::model::{
    Account, AccountId, AccumulationResult, Assumptions, Owner, Profile, TaxParams, TaxStatus,
};
use crate::scenario::{Scenario, run_scenarios};

fn accounts() -> Vec<Account> {
    vec![Account {
        account_id: AccountId(1),
        name: "rrsp".to_string(),
        owner: Owner::Primary,
        tax_status: TaxStatus::TaxDeferred,
        balance: 300_000.0,
        cost_basis: 0.0,
    }]
}

fn scenario(name: &str, safe_withdrawal_rate: f64) -> Scenario {
    let accounts = accounts();
    let accumulation = AccumulationResult::from_current_balances(&accounts);
    Scenario {
        name: name.to_string(),
        accounts,
        profile: Profile {
            current_age: 65,
            retirement_age: 65,
            life_expectancy: 70,
            regional_rate: 0.0,
            benefit: None,
            spouse: None,
        },
        assumptions: Assumptions {
            inflation_rate: 0.0,
            safe_withdrawal_rate,
            retirement_return_rate: 0.0,
            start_date: None,
        },
        accumulation,
    }
}

#[test]
fn test_results_preserve_input_order() {
    let params = TaxParams::year_2024();
    let scenarios = vec![
        scenario("lean", 0.02),
        scenario("base", 0.04),
        scenario("rich", 0.06),
    ];

    let results = run_scenarios(&scenarios, &params);
    assert_eq!(results.len(), 3);

    // Distinguishable first-year targets prove position i holds scenario i.
    for (result, expected_target) in results.iter().zip([6_000.0, 12_000.0, 18_000.0]) {
        assert!((result.years[0].target_spending - expected_target).abs() < 0.01);
    }
}

#[test]
fn test_batch_matches_individual_runs() {
    let params = TaxParams::year_2024();
    let scenarios = vec![scenario("lean", 0.02), scenario("rich", 0.06)];

    let batch = run_scenarios(&scenarios, &params);
    for (batch_result, s) in batch.iter().zip(&scenarios) {
        let solo = s.run(&params);
        assert_eq!(batch_result.years.len(), solo.years.len());
        assert!((batch_result.lifetime_taxes - solo.lifetime_taxes).abs() < 1e-9);
        assert!(
            (batch_result.sustainable_annual_nominal - solo.sustainable_annual_nominal).abs()
                < 1e-9
        );
    }
}
