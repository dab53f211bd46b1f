//! Command handlers

use avia_app::{Config, FlightLogForm, FuelReport};
use avia_domain::service::compute_fuel_balance;
use avia_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::output_report;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Calc {
            ground_time,
            air_time,
            main_qty,
            main_density,
            main_doc,
            aux,
            aux_qty,
            aux_density,
            aux_doc,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            let form = FlightLogForm {
                ground_time: ground_time.unwrap_or_default(),
                air_time: air_time.unwrap_or_default(),
                main_qty,
                main_density,
                main_doc,
                aux_used: aux,
                aux_qty: aux_qty.unwrap_or_default(),
                aux_density: aux_density.unwrap_or_default(),
                aux_doc: aux_doc.unwrap_or_default(),
            };
            cmd_calc(&form, output_format)
        }

        Commands::Config {
            show,
            set_output,
            reset,
        } => cmd_config(show, set_output, reset),
    }
}

fn cmd_calc(form: &FlightLogForm, output_format: OutputFormat) -> Result<()> {
    let input = form.parse()?;
    let balance = compute_fuel_balance(&input)?;
    let report = FuelReport::build(&input, &balance);
    output_report(output_format, &report)
}

fn cmd_config(show: bool, set_output: Option<OutputFormat>, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
