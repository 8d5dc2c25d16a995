//! Tax engine
//!
//! Pure functions computing ordinary-income plus capital-gains tax at
//! the federal and provincial levels. Both levels share the same
//! bracket-walk; they differ only in their tables, credits, and the
//! provincial surtax and health-premium layers. Out-of-domain income
//! (negative) is treated as zero; results are never negative.

use crate::model::{FederalTaxParams, PremiumBand, RegionalTaxParams, TaxBracket, TaxParams};

/// Progressive tax on `income` over an ascending bracket table.
///
/// Walks brackets in order, taxing `min(remaining, width)` in each at
/// that bracket's rate. Zero- or negative-width brackets contribute
/// nothing; negative income owes nothing.
pub fn bracket_tax(income: f64, brackets: &[TaxBracket]) -> f64 {
    if income <= 0.0 || brackets.is_empty() {
        return 0.0;
    }

    let mut remaining = income;
    let mut tax = 0.0;
    for bracket in brackets {
        if remaining <= 0.0 {
            break;
        }
        let width = bracket.width();
        if width <= 0.0 {
            continue;
        }
        let amount = remaining.min(width);
        tax += amount * bracket.rate;
        remaining -= amount;
    }
    tax
}

fn taxable_income(ordinary: f64, capital_gains: f64, inclusion: f64) -> f64 {
    ordinary.max(0.0) + capital_gains.max(0.0) * inclusion
}

/// Federal tax on ordinary income plus partially-included capital gains,
/// less the basic personal credit, floored at zero.
pub fn federal_tax(ordinary: f64, capital_gains: f64, params: &FederalTaxParams) -> f64 {
    let taxable = taxable_income(ordinary, capital_gains, params.capital_gains_inclusion);
    let gross = bracket_tax(taxable, &params.brackets);
    let credit = params.lowest_rate() * params.basic_personal_amount;
    (gross - credit).max(0.0)
}

/// Provincial tax: same inclusion and bracket-sum method, then the
/// provincial credit, two independently-evaluated additive surtax
/// layers on the basic tax, and the stepped health premium.
pub fn regional_tax(ordinary: f64, capital_gains: f64, params: &RegionalTaxParams) -> f64 {
    let taxable = taxable_income(ordinary, capital_gains, params.capital_gains_inclusion);
    if taxable <= 0.0 {
        return 0.0;
    }

    let gross = bracket_tax(taxable, &params.brackets);
    let credit = params.lowest_rate() * params.basic_personal_amount;
    let basic = (gross - credit).max(0.0);

    // Both surtax layers apply to the same basic amount and stack.
    let surtax: f64 = params
        .surtaxes
        .iter()
        .map(|s| (basic - s.threshold).max(0.0) * s.rate)
        .sum();

    basic + surtax + health_premium(taxable, &params.premium_bands)
}

/// Stepped flat premium: the highest band the taxable income enters.
fn health_premium(taxable: f64, bands: &[PremiumBand]) -> f64 {
    bands
        .iter()
        .filter(|b| taxable > b.income_over)
        .map(|b| b.amount)
        .last()
        .unwrap_or(0.0)
}

/// Marginal rate at a given taxable income, for advisory calculations.
pub fn marginal_rate(income: f64, brackets: &[TaxBracket]) -> f64 {
    if income <= 0.0 {
        return brackets.first().map_or(0.0, |b| b.rate);
    }
    brackets
        .iter()
        .find(|b| income > b.lower && income <= b.upper)
        .or(brackets.last())
        .map_or(0.0, |b| b.rate)
}

/// Standalone federal entry point on the 2024 tables.
pub fn compute_national_tax(ordinary: f64, capital_gains: f64) -> f64 {
    federal_tax(ordinary, capital_gains, &TaxParams::year_2024().federal)
}

/// Standalone provincial entry point. A positive `regional_rate` applies
/// the flat-rate approximation; zero selects the full 2024 Ontario
/// tables.
pub fn compute_regional_tax(ordinary: f64, capital_gains: f64, regional_rate: f64) -> f64 {
    if regional_rate > 0.0 {
        regional_tax(ordinary, capital_gains, &RegionalTaxParams::flat(regional_rate))
    } else {
        regional_tax(ordinary, capital_gains, &TaxParams::year_2024().regional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_walk_first_bracket_only() {
        let params = TaxParams::year_2024();
        let tax = bracket_tax(40_000.0, &params.federal.brackets);
        assert!((tax - 6_000.0).abs() < 0.01, "Expected 6000, got {tax}");
    }

    #[test]
    fn test_bracket_walk_spans_brackets() {
        let params = TaxParams::year_2024();
        // 120,000: 55,867 at 15% + 55,866 at 20.5% + 8,267 at 26%
        let expected = 55_867.0 * 0.15 + 55_866.0 * 0.205 + 8_267.0 * 0.26;
        let tax = bracket_tax(120_000.0, &params.federal.brackets);
        assert!((tax - expected).abs() < 0.01, "Expected {expected}, got {tax}");
    }

    #[test]
    fn test_bracket_walk_partition_identity() {
        // Splitting a total across partitions and reconstructing via the
        // walk must agree with the single-call result.
        let params = TaxParams::year_2024();
        let brackets = &params.federal.brackets;
        for total in [9_999.0, 55_867.0, 55_868.0, 137_500.0, 400_000.0] {
            let mut piecewise = 0.0;
            let mut remaining: f64 = total;
            for b in brackets {
                let amount = remaining.min(b.width());
                piecewise += amount * b.rate;
                remaining -= amount;
                if remaining <= 0.0 {
                    break;
                }
            }
            let walked = bracket_tax(total, brackets);
            assert!(
                (piecewise - walked).abs() < 1e-9,
                "partition mismatch at {total}: {piecewise} vs {walked}"
            );
        }
    }

    #[test]
    fn test_bracket_walk_negative_and_zero() {
        let params = TaxParams::year_2024();
        assert_eq!(bracket_tax(0.0, &params.federal.brackets), 0.0);
        assert_eq!(bracket_tax(-1_000.0, &params.federal.brackets), 0.0);
    }

    #[test]
    fn test_bracket_walk_zero_width_bracket() {
        let brackets = vec![
            TaxBracket { lower: 0.0, upper: 10_000.0, rate: 0.10 },
            TaxBracket { lower: 10_000.0, upper: 10_000.0, rate: 0.99 },
            TaxBracket { lower: 10_000.0, upper: f64::INFINITY, rate: 0.20 },
        ];
        let tax = bracket_tax(15_000.0, &brackets);
        assert!((tax - (1_000.0 + 1_000.0)).abs() < 0.01);
    }

    #[test]
    fn test_federal_tax_50k_matches_documented_constants() {
        let params = TaxParams::year_2024();
        let tax = federal_tax(50_000.0, 0.0, &params.federal);
        let expected = 50_000.0 * 0.15 - 15_705.0 * 0.15;
        assert!((tax - expected).abs() < 0.01, "Expected {expected}, got {tax}");
    }

    #[test]
    fn test_federal_tax_floors_at_zero() {
        let params = TaxParams::year_2024();
        assert_eq!(federal_tax(5_000.0, 0.0, &params.federal), 0.0);
        assert_eq!(federal_tax(-50_000.0, 0.0, &params.federal), 0.0);
    }

    #[test]
    fn test_federal_tax_gains_half_included() {
        let params = TaxParams::year_2024();
        let ordinary_only = federal_tax(40_000.0, 0.0, &params.federal);
        let with_gains = federal_tax(30_000.0, 20_000.0, &params.federal);
        assert!((ordinary_only - with_gains).abs() < 0.01);
    }

    #[test]
    fn test_regional_tax_surtaxes_stack() {
        let params = TaxParams::year_2024();
        // 120,000 taxable: basic tax clears both surtax thresholds and
        // lands in the 750 premium band.
        let tax = regional_tax(120_000.0, 0.0, &params.regional);
        let gross = 51_446.0 * 0.0505 + 51_448.0 * 0.0915 + 17_106.0 * 0.1116;
        let basic = gross - 12_399.0 * 0.0505;
        let expected =
            basic + 0.20 * (basic - 5_554.0) + 0.36 * (basic - 7_108.0) + 750.0;
        assert!((tax - expected).abs() < 0.5, "Expected {expected}, got {tax}");
    }

    #[test]
    fn test_regional_tax_below_surtax_threshold() {
        let params = TaxParams::year_2024();
        let tax = regional_tax(40_000.0, 0.0, &params.regional);
        let basic = 40_000.0 * 0.0505 - 12_399.0 * 0.0505;
        // Premium band for 40,000 is 450.
        assert!((tax - (basic + 450.0)).abs() < 0.5);
    }

    #[test]
    fn test_health_premium_band_edges() {
        let params = TaxParams::year_2024();
        let bands = &params.regional.premium_bands;
        assert_eq!(health_premium(20_000.0, bands), 0.0);
        assert_eq!(health_premium(20_001.0, bands), 300.0);
        assert_eq!(health_premium(48_001.0, bands), 600.0);
        assert_eq!(health_premium(250_000.0, bands), 900.0);
    }

    #[test]
    fn test_regional_flat_rate() {
        let tax = compute_regional_tax(50_000.0, 10_000.0, 0.10);
        // Flat: (50,000 + 5,000 included gains) at 10%
        assert!((tax - 5_500.0).abs() < 0.01);
    }

    #[test]
    fn test_marginal_rate_lookup() {
        let params = TaxParams::year_2024();
        assert_eq!(marginal_rate(30_000.0, &params.federal.brackets), 0.15);
        assert_eq!(marginal_rate(60_000.0, &params.federal.brackets), 0.205);
        assert_eq!(marginal_rate(300_000.0, &params.federal.brackets), 0.33);
    }

    #[test]
    fn test_year_2023_first_bracket_differs() {
        let y23 = TaxParams::year_2023();
        let y24 = TaxParams::year_2024();
        assert!(y23.federal.lowest_bracket_ceiling() < y24.federal.lowest_bracket_ceiling());
        let tax23 = federal_tax(50_000.0, 0.0, &y23.federal);
        let expected = 50_000.0 * 0.15 - 15_000.0 * 0.15;
        assert!((tax23 - expected).abs() < 0.01);
    }
}
