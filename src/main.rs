use anyhow::Context;
use canteen::config::Cli;
use canteen::lifecycle::{setup_tracing, Canteen};
use canteen::persistence::Hydration;
use canteen::shell::{Exit, Shell};
use clap::Parser;
use std::io;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_filter.as_deref());

    let data_file = cli.data_file();
    let (mut canteen, hydration) = Canteen::open(data_file.clone())
        .with_context(|| format!("could not load {}", data_file.path().display()))?;
    match hydration {
        Hydration::Restored => println!("Data loaded successfully."),
        Hydration::Fresh => {
            println!("No saved data found. Starting with empty menu and order manager.")
        }
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    match shell
        .run(&mut canteen)
        .context("canteen session failed")?
    {
        Exit::Saved => info!(path = %canteen.data_file().path().display(), "Session ended with save"),
        Exit::EndOfInput => {
            warn!("Input closed before save");
            println!("\nInput closed. Changes from this session were not saved.");
        }
    }
    Ok(())
}
