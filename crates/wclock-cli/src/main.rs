//! # wclock CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use wclock_core::SearchDirection;

/// World-clock CLI — DST transition search and clock tables.
///
/// Looks up offset changes for IANA zones and prints clock listings for a
/// curated directory of places.
#[derive(Parser, Debug)]
#[command(name = "wclock", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Locate a zone's next offset change.
    Next(wclock_cli::transition::TransitionArgs),
    /// Locate a zone's previous offset change.
    Prev(wclock_cli::transition::TransitionArgs),
    /// Test whether a zone changes offset near a reference instant.
    HasDst(wclock_cli::transition::HasDstArgs),
    /// Print a clock table for the zone directory.
    Clocks(wclock_cli::clocks::ClocksArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Next(args) => wclock_cli::transition::run(&args, SearchDirection::Forward)?,
        Commands::Prev(args) => wclock_cli::transition::run(&args, SearchDirection::Backward)?,
        Commands::HasDst(args) => {
            if !wclock_cli::transition::run_has_dst(&args)? {
                std::process::exit(1);
            }
        }
        Commands::Clocks(args) => wclock_cli::clocks::run(args)?,
    }

    Ok(())
}
