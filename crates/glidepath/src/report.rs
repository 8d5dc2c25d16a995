//! Plain-text plan report
//!
//! Renders the accumulation summary, the year-by-year withdrawal
//! ledger, and the lifetime outcome figures to stdout.

use std::fmt::Write as _;

use glidepath_core::metrics::effective_tax_rate;
use glidepath_core::model::{AccumulationResult, RetirementResult};

/// Format a currency value without cents
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value.round() as i64;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${dollars_formatted}")
    } else {
        format!("-${dollars_formatted}")
    }
}

/// Format a fractional rate as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn render_report(
    plan_name: &str,
    accumulation: &AccumulationResult,
    result: &RetirementResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Plan: {plan_name}");
    let _ = writeln!(
        out,
        "At retirement: {} nominal ({} in today's dollars)",
        format_currency(accumulation.total_at_retirement),
        format_currency(accumulation.real_total_at_retirement),
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>4} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Age", "Year", "Target", "Withdrawn", "Fixed", "Tax", "After-tax", "Remaining"
    );
    for year in &result.years {
        let _ = writeln!(
            out,
            "{:>4} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
            year.age,
            year.calendar_year,
            format_currency(year.target_spending),
            format_currency(year.total_withdrawal),
            format_currency(year.fixed_income),
            format_currency(year.total_tax),
            format_currency(year.after_tax_income),
            format_currency(year.total_remaining),
        );
    }
    let _ = writeln!(out);

    match result.depletion_age {
        Some(age) => {
            let _ = writeln!(out, "Portfolio depleted at age {age}");
        }
        None => {
            let _ = writeln!(out, "Portfolio lasts the full horizon");
        }
    }
    let lifetime_gross: f64 = result.years.iter().map(|y| y.gross_income).sum();
    let _ = writeln!(
        out,
        "Lifetime taxes: {} ({} effective)",
        format_currency(result.lifetime_taxes),
        format_percentage(effective_tax_rate(result.lifetime_taxes, lifetime_gross)),
    );
    let _ = writeln!(
        out,
        "Sustainable income: {}/yr nominal ({}/mo), {}/yr real ({}/mo)",
        format_currency(result.sustainable_annual_nominal),
        format_currency(result.sustainable_monthly_nominal),
        format_currency(result.sustainable_annual_real),
        format_currency(result.sustainable_monthly_real),
    );
    out
}
