use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process;

use futsalku::config::Config;
use futsalku::{commands, interactive, logging};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser)]
#[command(name = "futsalku")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Book futsal courts from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive booking app (default)
    Tui,
    /// List venues
    Venues {
        /// Filter chip: indoor, outdoor, vinyl, rumput-sintetis
        #[arg(short = 'f', long)]
        filter: Option<String>,

        /// Case-insensitive search on the venue name
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List time slots and their availability
    Slots,
    /// Price a booking
    Quote {
        /// Venue id (see `venues`)
        #[arg(long)]
        venue: u32,

        /// Start time, HH:MM
        #[arg(short = 't', long)]
        time: String,

        /// Hours: 1, 2 or 3
        #[arg(short = 'd', long, default_value_t = 1)]
        duration: u32,

        /// Promo code, e.g. FIRST30 or DISKON50K
        #[arg(short = 'p', long)]
        promo: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List past and upcoming bookings
    Bookings {
        /// upcoming, history or cancelled (default: all tabs)
        #[arg(long)]
        tab: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => (),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let command = cli.command.unwrap_or(Commands::Tui);
    if let Commands::Tui = command {
        // stderr belongs to the terminal UI, so logs only go to the file
        if let Err(e) = logging::init_with_file(&config.log_file, cli.verbose) {
            eprintln!("Warning: file logging disabled: {}", e);
        }
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting interactive mode");
        interactive::run_interactive(config).await?;
        return Ok(());
    }

    logging::init(cli.verbose);
    tracing::debug!(?config, "Loaded configuration");
    match command {
        Commands::Venues {
            filter,
            search,
            json,
        } => commands::list_venues(filter.as_deref(), search.as_deref(), json)?,
        Commands::Slots => commands::list_slots(),
        Commands::Quote {
            venue,
            time,
            duration,
            promo,
            json,
        } => {
            commands::quote(venue, &time, duration, promo.as_deref(), json)?;
        }
        Commands::Bookings { tab } => commands::list_bookings(tab.as_deref())?,
        Commands::Tui => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["futsalku"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parsing_quote() {
        let cli = Cli::try_parse_from([
            "futsalku", "quote", "--venue", "2", "-t", "19:00", "-d", "3", "-p", "first30",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Quote {
                venue,
                time,
                duration,
                promo,
                json,
            }) => {
                assert_eq!(venue, 2);
                assert_eq!(time, "19:00");
                assert_eq!(duration, 3);
                assert_eq!(promo, Some("first30".to_string()));
                assert!(!json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_venues_with_global_verbose() {
        let cli = Cli::try_parse_from(["futsalku", "venues", "-f", "indoor", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Venues { filter, json, .. }) => {
                assert_eq!(filter, Some("indoor".to_string()));
                assert!(!json);
            }
            _ => panic!("Expected Venues command"),
        }
    }

    #[test]
    fn test_cli_quote_requires_venue() {
        assert!(Cli::try_parse_from(["futsalku", "quote", "-t", "09:00"]).is_err());
    }
}
