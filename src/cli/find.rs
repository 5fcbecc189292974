//! Find command handler
//!
//! Runs the center-finding pipeline once and prints the outcome.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::get_geocoder;
use crate::pipeline::pacing::{FixedDelay, NoDelay, Pacer};
use crate::pipeline::{CenterFinder, CenterOutcome};
use clap::Args;
use std::io::Read;

/// Find command arguments
#[derive(Args)]
pub struct FindArgs {
    /// Addresses to resolve (comma or newline separated)
    pub addresses: Vec<String>,

    /// Read addresses from a file, or "-" for stdin
    #[arg(long, short = 'i', conflicts_with = "addresses")]
    pub input: Option<String>,

    /// City context for disambiguation, e.g. "Delhi, India"
    #[arg(long, short = 'c')]
    pub city: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Skip the one-second pause between requests
    ///
    /// Only appropriate against a self-hosted Nominatim instance.
    #[arg(long)]
    pub no_delay: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the find command
pub async fn run(args: FindArgs) -> Result<()> {
    // Handle list flag first
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    // Load config
    let config = Config::load()?;

    // Gather raw input
    let raw = if let Some(path) = &args.input {
        if path == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        }
    } else if !args.addresses.is_empty() {
        args.addresses.join("\n")
    } else {
        eprintln!("Error: No addresses given. Pass them as arguments or use --input");
        std::process::exit(1);
    };

    // Run the pipeline
    let backend = get_geocoder(&config.geocode.endpoint);
    let outcome = if args.no_delay {
        run_pipeline(backend, NoDelay, &raw, args.city.as_deref()).await?
    } else {
        run_pipeline(backend, FixedDelay::default(), &raw, args.city.as_deref()).await?
    };

    // Format output
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&outcome, &config)?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

async fn run_pipeline<P: Pacer>(
    backend: crate::geo::nominatim::NominatimBackend,
    pacer: P,
    raw: &str,
    city: Option<&str>,
) -> Result<CenterOutcome> {
    CenterFinder::new(backend, pacer).run(raw, city).await
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
