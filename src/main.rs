use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;

use orders_analyzer::{analyze_file, report, AnalysisError};

#[derive(Parser)]
#[command(name = "orders_analyzer", author = "Saddam Uwejan")]
#[command(about = "Find the orders with the highest total, quantity and discount in a CSV file")]
struct Cli {
    /// CSV file with Id, Article_Name, Quantity, Unit_Price, Percentage_Discount, Buyer columns
    input_file: PathBuf,
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_module("orders_analyzer", LevelFilter::Info);
    }
    let _ = builder.format_timestamp_millis().try_init();
}

fn run() -> Result<(), AnalysisError> {
    let cli = Cli::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let rendered = e.render().to_string();
            let message = rendered.trim_start_matches("error: ").trim_end();
            AnalysisError::Usage(message.to_owned())
        }
    })?;

    let result = analyze_file(&cli.input_file)?;
    report::write_report(&result, io::stdout().lock())?;

    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
