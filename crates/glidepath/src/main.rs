use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::bail;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use glidepath_core::accumulation::project_to_retirement;
use glidepath_core::model::TaxParams;
use glidepath_core::simulation::simulate_withdrawals;
use glidepath_core::validate_inputs;

mod config;
mod report;

#[derive(Parser, Debug)]
#[command(name = "glidepath")]
#[command(about = "A deterministic household retirement projector")]
struct Args {
    /// Path to the plan file (JSON)
    plan: PathBuf,

    /// Tax parameter year to apply (2023 or 2024)
    #[arg(short, long, default_value_t = 2024)]
    tax_year: u16,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let default_filter = format!("glidepath={level},glidepath_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let params = match args.tax_year {
        2023 => TaxParams::year_2023(),
        2024 => TaxParams::year_2024(),
        other => bail!("no tax parameters available for year {other}"),
    };

    let plan = config::load_plan(&args.plan)?;
    validate_inputs(&plan.profile, &plan.assumptions)?;

    let plan_name = plan.name.clone().unwrap_or_else(|| {
        args.plan
            .file_stem()
            .map_or_else(|| "plan".to_string(), |s| s.to_string_lossy().into_owned())
    });
    tracing::info!(
        plan = %plan_name,
        accounts = plan.accounts.len(),
        tax_year = args.tax_year,
        "loaded plan"
    );

    let accumulation = project_to_retirement(
        &plan.accounts,
        &plan.profile,
        &plan.assumptions,
        &plan.contributions,
        plan.accumulation_return(),
        &params,
    );
    tracing::debug!(
        total_at_retirement = accumulation.total_at_retirement,
        "accumulation phase complete"
    );

    let result = simulate_withdrawals(
        &plan.accounts,
        &plan.profile,
        &plan.assumptions,
        &accumulation,
        &params,
    );
    tracing::debug!(
        years = result.years.len(),
        lifetime_taxes = result.lifetime_taxes,
        "withdrawal simulation complete"
    );

    print!("{}", report::render_report(&plan_name, &accumulation, &result));

    Ok(())
}
