//! CLI definition using clap

use avia_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "avia-calc")]
#[command(version)]
#[command(about = "Flight log fuel balance calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the fuel balance for one flight
    Calc {
        /// Taxiing time ("HH:MM", "HH-MM" or minutes; omit for 0)
        #[arg(long, short = 'g')]
        ground_time: Option<String>,

        /// Airborne time (same formats; omit for 0)
        #[arg(long, short = 'a')]
        air_time: Option<String>,

        /// Main tank refueled quantity in liters
        #[arg(long)]
        main_qty: String,

        /// Main tank fuel density in kg/L
        #[arg(long)]
        main_density: String,

        /// Main tank refueling document reference
        #[arg(long)]
        main_doc: String,

        /// Auxiliary (end) tanks were filled
        #[arg(long)]
        aux: bool,

        /// Aux tank refueled quantity in liters (required with --aux)
        #[arg(long, requires = "aux")]
        aux_qty: Option<String>,

        /// Aux tank fuel density in kg/L (required with --aux)
        #[arg(long, requires = "aux")]
        aux_density: Option<String>,

        /// Aux tank refueling document reference (required with --aux)
        #[arg(long, requires = "aux")]
        aux_doc: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
