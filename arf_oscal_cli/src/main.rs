//! # ARF to OSCAL CLI
//!

use arf_oscal::config::constants::compile_time::input::CONFIG_FILE_NAME;
use arf_oscal::logging::codes;
use arf_oscal::{log_info, logging, pipeline, ConversionError, ConverterConfig};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "arf2oscal",
    version,
    about = "Convert an OpenSCAP ARF scan result into OSCAL assessment results",
    long_about = "Reads an OpenSCAP Asset Reporting Format (ARF) XML file and writes an OSCAL \
                  assessment-results JSON document with one observation per evaluated rule \
                  and one finding per NIST control. Settings are read from an optional \
                  arf2oscal.toml in the working directory."
)]
struct Cli {
    /// Path to the ARF XML file
    arf_file: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", e);
                process::exit(0);
            }
            _ => {
                println!("{}", e);
                process::exit(1);
            }
        },
    };

    let config = match ConverterConfig::load_optional(Path::new(CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_global_logging(&config.logging) {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &e);
    }

    if let Err(e) = run(&cli, &config) {
        println!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &ConverterConfig) -> Result<(), ConversionError> {
    let start = Instant::now();
    log_info!("ARF conversion starting", "path" => &cli.arf_file);

    let outcome = pipeline::convert_file(&cli.arf_file, config)?;

    print_summary(&outcome.summary, start.elapsed());

    pipeline::write_report(&outcome.document, Path::new(&config.output_file))?;

    println!(
        "\nSuccessfully generated {} from {}",
        config.output_file, cli.arf_file
    );
    Ok(())
}

fn print_summary(summary: &pipeline::ConversionSummary, duration: Duration) {
    println!("\n{}", summary);
    println!("Duration: {:.2}s", duration.as_secs_f64());
}
