use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use parklot::clock::FixedClock;
use parklot::config::{load_config, load_session, SessionEvent};
use parklot::export::{export_csv, export_json, Receipt};
use parklot::fees::compute_fee;
use parklot::model::Vehicle;

#[derive(Parser, Debug)]
#[command(name = "parklot")]
#[command(about = "Run a scripted parking session against a facility description")]
#[command(version)]
struct Args {
    /// Path to the facility configuration (JSON)
    #[arg(required = true)]
    config: PathBuf,

    /// Path to the session script (JSON list of park/unpark events)
    #[arg(required = true)]
    session: PathBuf,

    /// Export receipts to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export receipts to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let events = load_session(&args.session)?;

    let clock = FixedClock::new(chrono::DateTime::UNIX_EPOCH);
    let mut facility = config.build(Box::new(clock.clone()))?;
    let mut receipts = Vec::new();

    for event in events {
        match event {
            SessionEvent::Park { at, plate, class } => {
                clock.set(at);
                let record = facility.park_vehicle(Vehicle::new(plate, class))?;
                println!(
                    "Ticket #{}: {} -> spot {}",
                    record.ticket_id(),
                    record.vehicle().plate(),
                    record.spot()
                );
            }
            SessionEvent::Unpark { at, plate } => {
                clock.set(at);
                let record = facility.unpark_vehicle(&plate)?;
                let fee = compute_fee(&record, &config.rates)?;
                println!(
                    "{} left spot {}: {} unit(s), fee {}",
                    record.vehicle().plate(),
                    record.spot(),
                    fee.billed_units,
                    fee.amount_minor
                );
                receipts.push(Receipt { record, fee });
            }
        }
    }

    println!("{} vehicle(s) still parked", facility.vehicles_parked());

    if let Some(csv_path) = &args.csv {
        export_csv(&receipts, csv_path)?;
        println!("Exported receipts to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&receipts, json_path)?;
        println!("Exported receipts to JSON: {}", json_path.display());
    }

    Ok(())
}
