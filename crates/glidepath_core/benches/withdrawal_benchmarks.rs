//! Criterion benchmarks for glidepath_core
//!
//! Run with: cargo bench -p glidepath_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glidepath_core::model::{
    Account, AccountId, AccumulationResult, Assumptions, FixedBenefit, Owner, Profile, TaxParams,
    TaxStatus,
};
use glidepath_core::scenario::{Scenario, run_scenarios};
use glidepath_core::simulation::simulate_withdrawals;
use glidepath_core::taxes::compute_regional_tax;

fn create_household_accounts() -> Vec<Account> {
    vec![
        Account {
            account_id: AccountId(1),
            name: "rrsp-primary".to_string(),
            owner: Owner::Primary,
            tax_status: TaxStatus::TaxDeferred,
            balance: 600_000.0,
            cost_basis: 0.0,
        },
        Account {
            account_id: AccountId(2),
            name: "rrsp-spouse".to_string(),
            owner: Owner::Spouse,
            tax_status: TaxStatus::TaxDeferred,
            balance: 350_000.0,
            cost_basis: 0.0,
        },
        Account {
            account_id: AccountId(3),
            name: "tfsa".to_string(),
            owner: Owner::Primary,
            tax_status: TaxStatus::TaxFree,
            balance: 120_000.0,
            cost_basis: 0.0,
        },
        Account {
            account_id: AccountId(4),
            name: "brokerage".to_string(),
            owner: Owner::Primary,
            tax_status: TaxStatus::Taxable,
            balance: 250_000.0,
            cost_basis: 140_000.0,
        },
    ]
}

fn create_couple_profile(horizon_to: u8) -> Profile {
    Profile {
        current_age: 60,
        retirement_age: 65,
        life_expectancy: horizon_to,
        regional_rate: 0.0,
        benefit: Some(FixedBenefit {
            annual_amount: 15_000.0,
            start_age: 70,
        }),
        spouse: Some(Box::new(Profile {
            current_age: 58,
            retirement_age: 65,
            life_expectancy: horizon_to,
            regional_rate: 0.0,
            benefit: None,
            spouse: None,
        })),
    }
}

fn create_assumptions() -> Assumptions {
    Assumptions {
        inflation_rate: 0.025,
        safe_withdrawal_rate: 0.04,
        retirement_return_rate: 0.05,
        start_date: Some(jiff::civil::date(2025, 1, 1)),
    }
}

fn bench_couple_withdrawal(c: &mut Criterion) {
    let accounts = create_household_accounts();
    let profile = create_couple_profile(95);
    let assumptions = create_assumptions();
    let accumulation = AccumulationResult::from_current_balances(&accounts);
    let params = TaxParams::year_2024();

    c.bench_function("couple_30yr_withdrawal", |b| {
        b.iter(|| {
            simulate_withdrawals(
                black_box(&accounts),
                black_box(&profile),
                black_box(&assumptions),
                black_box(&accumulation),
                black_box(&params),
            )
        })
    });
}

fn bench_horizon_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("horizon");
    let accounts = create_household_accounts();
    let assumptions = create_assumptions();
    let accumulation = AccumulationResult::from_current_balances(&accounts);
    let params = TaxParams::year_2024();

    for life_expectancy in [75u8, 85, 95, 105].iter() {
        let profile = create_couple_profile(*life_expectancy);
        group.bench_with_input(
            BenchmarkId::new("life_expectancy", life_expectancy),
            life_expectancy,
            |b, _| {
                b.iter(|| {
                    simulate_withdrawals(
                        black_box(&accounts),
                        black_box(&profile),
                        black_box(&assumptions),
                        black_box(&accumulation),
                        black_box(&params),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_scenario_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_fanout");
    let accounts = create_household_accounts();
    let accumulation = AccumulationResult::from_current_balances(&accounts);
    let params = TaxParams::year_2024();

    for count in [4usize, 16, 64].iter() {
        let scenarios: Vec<Scenario> = (0..*count)
            .map(|i| {
                let mut assumptions = create_assumptions();
                assumptions.safe_withdrawal_rate = 0.03 + 0.0005 * i as f64;
                Scenario {
                    name: format!("swr-{i}"),
                    accounts: accounts.clone(),
                    profile: create_couple_profile(95),
                    assumptions,
                    accumulation: accumulation.clone(),
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("scenarios", count), count, |b, _| {
            b.iter(|| run_scenarios(black_box(&scenarios), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_regional_tax(c: &mut Criterion) {
    c.bench_function("regional_tax_progressive", |b| {
        b.iter(|| compute_regional_tax(black_box(145_000.0), black_box(20_000.0), black_box(0.0)))
    });
}

criterion_group!(
    benches,
    bench_couple_withdrawal,
    bench_horizon_lengths,
    bench_scenario_fanout,
    bench_regional_tax,
);
criterion_main!(benches);
