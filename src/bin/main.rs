mod common;
use std::env::{set_var, var};
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

use chrono::prelude::*;
use clap::Parser;

use common::config::builder::ConfigContainer;
use common::helpers::{apply_soil, select_soil, store_submissions, valid_inputs};
use common::io::readers::read_submissions;
use common::io::writers::{OutputFormat, OutputWriter};
use log::{debug, info, trace, warn};
use recharge::api::store::JsonLinesStore;
use recharge::modules::recharge::models::RechargeBatch;
use recharge::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    about="Recharge basin assessment: recharge volume, costs and simple payback of a groundwater recharge basin",
    long_about="Estimates the hydrologic yield and the financial return of groundwater recharge basins
from farmer supplied parameters (land area, infiltration rate, season length, costs, pumping energy).
Every submission is validated, stored and evaluated through the parity stage."
)]
struct Args {
    #[arg(required = true, help = "Path to the configuration file (.yml/.yaml)", index = 1)]
    config_path: String,

    #[arg(required = true, help = "Path to the submissions file (.json/.jsonl)", index = 2)]
    input_path: String,

    #[arg(long, help = "Write the results to this file instead of stdout")]
    output: Option<String>,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    format: String,

    #[arg(long, help = "Do not store the raw submissions")]
    no_store: bool,

    #[arg(long, help = "Soil key from the configuration used to set the infiltration rate")]
    soil: Option<String>,

    #[arg(long, requires = "lon", allow_hyphen_values = true, help = "Latitude of the field, used to suggest a soil")]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true, help = "Longitude of the field, used to suggest a soil")]
    lon: Option<f64>,
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    if !Path::new(&args.config_path).is_file() {
        return Err(format!("Config file {} is not a file", args.config_path).into());
    }

    let format = OutputFormat::from_str(&args.format)
        .map_err(|_| format!("Unsupported output format '{}'", args.format))?;

    let configs = ConfigContainer::from_file(&args.config_path)
        .map_err(|err| format!("Failed to load config: {}", err))?;
    if !configs.parity.is_identity() {
        info!("Parity factors: {:?}", configs.parity);
    }

    let start_time = Utc::now();
    let records = read_submissions(&args.input_path)
        .map_err(|err| format!("Failed to load submissions: {}", err))?;
    info!("Read {} submissions from {}", records.len(), args.input_path);

    let (indexes, inputs) = valid_inputs(records);
    if inputs.is_empty() {
        warn!("No valid submissions to evaluate");
        return Ok(());
    }

    let location = args.lat.zip(args.lon);
    let soil = select_soil(&configs.soils, args.soil.as_deref(), location)?;
    let inputs = apply_soil(inputs, soil);

    if args.no_store {
        debug!("Skipping submission storage");
    } else {
        let mut store = JsonLinesStore::new(&configs.store_path);
        let stored = store_submissions(&mut store, &inputs);
        info!("Stored {} submissions in {}", stored, store.path().display());
    }

    let batch = RechargeBatch::new(inputs);
    let c = Utc::now();
    let outputs = batch.evaluate(&configs.parity);
    trace!("Evaluating {} submissions took {}", batch.len(), Utc::now() - c);

    let mut output_writer =
        OutputWriter::new(args.output.as_deref(), format, configs.currency_digits)?;
    output_writer.write_output(&indexes, &outputs.to_vec())?;

    let elapsed_time = Utc::now() - start_time;
    info!("Elapsed time: {} ms", elapsed_time.num_milliseconds());
    Ok(())
}
