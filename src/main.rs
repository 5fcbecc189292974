//! geocenter CLI entry point
//!
//! Find the geographic center of a set of addresses - CLI + web app

use geocenter::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
