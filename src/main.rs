use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use flightscout::{
    DomainError, FindFlightsUseCase, FlightSearchResult, GeminiClient, GenerateItineraryUseCase,
    Itinerary,
};

#[derive(Parser)]
#[command(name = "flightscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API key for the Gemini service; falls back to GEMINI_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search flights for a free-text route query, e.g. "JFK to LHR in October"
    Search {
        query: String,
    },

    /// Generate a 3-day itinerary for a destination
    Itinerary {
        destination: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = Arc::new(GeminiClient::from_env(cli.api_key));

    let outcome = match cli.command {
        Commands::Search { query } => {
            let query = query.trim();
            if query.is_empty() {
                anyhow::bail!("query must not be empty");
            }
            FindFlightsUseCase::new(client)
                .execute(query)
                .await
                .map(|result| print_search_result(&result))
        }
        Commands::Itinerary { destination } => {
            let destination = destination.trim();
            if destination.is_empty() {
                anyhow::bail!("destination must not be empty");
            }
            GenerateItineraryUseCase::new(client)
                .execute(destination)
                .await
                .map(|itinerary| print_itinerary(&itinerary))
        }
    };

    outcome.map_err(|e: DomainError| anyhow::anyhow!(e.user_message()))
}

fn print_search_result(result: &FlightSearchResult) {
    if result.is_empty() {
        println!("No flight options found.");
        return;
    }

    println!("Flight options:");
    for (i, flight) in result.flights().iter().enumerate() {
        println!("  {}. {}", i + 1, flight.display_line());
    }

    if !result.sources().is_empty() {
        println!("\nSources:");
        for source in result.sources() {
            println!("  - {} ({})", source.title(), source.uri());
        }
    }
}

fn print_itinerary(itinerary: &Itinerary) {
    println!("{}", itinerary.title());
    for day in itinerary.days() {
        println!("\nDay {}: {}", day.day(), day.title());
        for activity in day.activities() {
            println!("  {}: {}", activity.time(), activity.description());
        }
    }
}
