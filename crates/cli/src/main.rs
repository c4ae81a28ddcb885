//! Printcost CLI - Quick pricing calculator for 3D prints.
//!
//! # Usage
//!
//! ```bash
//! # Quote a single print
//! printcost quote -m 120:90 --hours 4.5 --margin 50
//!
//! # Price a job file produced from slicer output
//! printcost job benchy.yaml
//!
//! # Energy cost per hour for a printer class
//! printcost energy --preset fdm-heated-bed
//!
//! # Landed cost of a filament order
//! printcost landed order.yaml
//!
//! # Profit of a sale
//! printcost sale --unit-price 118.25 --unit-cost 35.475 -q 3
//! ```
//!
//! # Commands
//!
//! - `quote` - Price a print from command-line flags
//! - `job` - Price a YAML/JSON job file
//! - `energy` - Energy cost per hour from watts or a preset
//! - `landed` - Spread order shipping and fees over filament spools
//! - `sale` - Revenue and profit of a sale
//!
//! Reports go to stdout; logs go to stderr (`RUST_LOG` controls verbosity,
//! `PRINTCOST_LOG_FORMAT=json` switches to JSON lines).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;
mod report;

#[derive(Parser)]
#[command(name = "printcost")]
#[command(author, version, about = "3D-print pricing calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a print from command-line flags
    Quote(commands::quote::QuoteArgs),

    /// Price a YAML or JSON job file
    Job {
        /// Path to the job file (.yaml, .yml or .json)
        file: String,

        /// Fail when a material has no catalog cost
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Energy cost per print hour
    Energy {
        /// Printer draw in watts
        #[arg(short, long, conflicts_with = "preset")]
        watts: Option<Decimal>,

        /// Printer class preset (see --list-presets)
        #[arg(short, long)]
        preset: Option<String>,

        /// Electricity rate per kWh
        #[arg(long)]
        kwh_cost: Option<Decimal>,

        /// List the built-in presets
        #[arg(long)]
        list_presets: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Landed cost per kg of a filament order
    Landed {
        /// Path to the order file (.yaml, .yml or .json)
        file: String,

        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Revenue and profit of a sale
    Sale {
        /// Price per unit
        #[arg(long)]
        unit_price: Decimal,

        /// Cost per unit
        #[arg(long)]
        unit_cost: Decimal,

        /// Units sold
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "printcost_cli=info".into());

    // JSON logs for scripted runs, text otherwise. Both go to stderr so
    // stdout only carries the report.
    let is_json =
        std::env::var("PRINTCOST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::from_env()?;

    match cli.command {
        Commands::Quote(args) => commands::quote::run(&args, &settings)?,
        Commands::Job { file, strict, json } => {
            commands::job::run(&file, &settings, strict, json)?;
        }
        Commands::Energy {
            watts,
            preset,
            kwh_cost,
            list_presets,
            json,
        } => commands::energy::run(
            watts,
            preset.as_deref(),
            kwh_cost,
            list_presets,
            json,
            &settings,
        )?,
        Commands::Landed { file, json } => commands::landed::run(&file, json)?,
        Commands::Sale {
            unit_price,
            unit_cost,
            quantity,
            json,
        } => commands::sale::run(unit_price, unit_cost, quantity, json)?,
    }
    Ok(())
}
