mod cli;
mod core;
mod error;
mod input;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, EstimateArgs, OutputFormat},
    core::{dhw::UnsupportedBoilerUsage, home::Home},
    input::{
        EstimationInput,
        billing::{NormalizeBilling, build_billing_periods},
    },
    prelude::*,
    report::Report,
    tables::{build_classification_table, build_summary_table, build_winter_periods_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => estimate(&args),
        Command::Classify(args) => {
            println!("{}", build_classification_table(&args.dates));
            Ok(())
        }
    }
}

#[instrument(skip_all, fields(input = %args.input.display()))]
fn estimate(args: &EstimateArgs) -> Result {
    let input = EstimationInput::read_from(&args.input)?;
    ensure!(!input.temperatures.is_empty(), "the input contains no temperatures");
    info!(
        fuel_type = ?input.summary.fuel_type,
        n_temperatures = input.temperatures.len(),
        "loaded",
    );
    if let Some(dhw) = &input.dhw {
        info!(
            n_occupants = dhw.number_of_occupants,
            water_heating_efficiency = dhw.estimated_water_heating_efficiency,
            stand_by_losses = dhw.stand_by_losses,
            "the heating boiler also heats the water",
        );
    }

    let records = input.billing.normalize()?;
    let billing_periods =
        build_billing_periods(&records, &input.temperatures, args.initial_balance_point)?;
    let home = Home::builder()
        .summary(&input.summary)
        .billing_periods(billing_periods)
        .initial_balance_point(args.initial_balance_point)
        .has_boiler_for_dhw(input.dhw.is_some())
        .same_fuel_dhw_heating(input.dhw.is_some())
        .build();
    info!(
        n_winter = home.bills_winter().count(),
        n_summer = home.bills_summer().len(),
        n_shoulder = home.bills_shoulder().len(),
        "classified the billing periods",
    );
    let estimate = home
        .calculate(&args.search, &UnsupportedBoilerUsage)
        .context("failed to estimate the balance point")?;

    let report = Report::try_new(&records, &input.summary, &estimate)?;
    match args.format {
        OutputFormat::Table => {
            println!("{}", build_winter_periods_table(&report.winter_periods));
            println!("{}", build_summary_table(&report.heat_load));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
